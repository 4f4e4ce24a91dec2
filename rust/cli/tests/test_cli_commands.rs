mod helpers;

use helpers::cli_runner::CliRunner;
use serde_json::Value;

const FIVE_PLAYERS: &str = "0.5,0.2,0.05,0.85,0.1";

#[test]
fn solve_text_prints_win_table() {
    let res = CliRunner::new().run(&["solve", "--coins", "0.25,0.5,1.0"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Players: 3 (P0 acts first)"));
    assert!(res.stdout.contains("P1   coin 0.500000  win 0.425000"));
    assert!(res.stdout.contains("Total: 1.000000"));
    assert!(res.stderr.is_empty());
}

#[test]
fn solve_json_matches_known_five_player_odds() {
    let res = CliRunner::new().run(&["solve", "--coins", FIVE_PLAYERS, "--format", "json"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json: Value = serde_json::from_str(res.stdout.trim()).unwrap();
    let wins: Vec<f64> = json["win_probabilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    let expected = [
        0.2441626530958875,
        0.18885344861503534,
        0.18867353771399362,
        0.1731665763529355,
        0.20514378422214835,
    ];
    for (got, want) in wins.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "{got} vs {want}");
    }
    assert_eq!(json["fair"], Value::Bool(false));
    assert!(json.get("cross_check").is_none() || json["cross_check"].is_null());
}

#[test]
fn solve_accepts_whitespace_separated_coins() {
    let res = CliRunner::new().run(&["solve", "--coins", "0.3 0.6", "--precision", "2"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("P0   coin 0.30"));
    assert!(res.stdout.contains("Fair: yes"));
}

#[test]
fn fair_reports_five_player_rankings() {
    let res = CliRunner::new().run(&["fair", "--coins", FIVE_PLAYERS]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Skill ranks: [4, 3, 1, 5, 2]"));
    assert!(res.stdout.contains("Win ranks:   [5, 3, 2, 1, 4]"));
    assert!(res.stdout.contains("Fair: no"));
    assert!(res.stdout.contains("P3 skill rank 5 but win rank 1"));
}

#[test]
fn inspect_heads_up_shows_flow_to_each_survivor() {
    let res = CliRunner::new().run(&["inspect", "--coins", "0.5,0.5"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Cycle [P0 P1]"));
    assert!(res.stdout.contains("  P0 -> P1"));
    assert!(res.stdout.contains("  P1 -> P0"));
    assert!(res.stdout.contains("multiplier 1.333333"));
    assert!(res.stdout.contains("  [P0] flow 0.666667"));
    assert!(res.stdout.contains("  [P1] flow 0.333333"));
}

#[test]
fn sim_agrees_with_exact_solution() {
    let res = CliRunner::new().run(&[
        "sim", "--coins", "0.25,0.5,1.0", "--trials", "200000", "--seed", "42",
    ]);
    assert_eq!(res.exit_code, 0, "stdout={} stderr={}", res.stdout, res.stderr);
    assert!(res.stdout.contains("Seed: 42"));
    assert!(res.stdout.contains("Cross-check: OK"));
}

#[test]
fn sim_is_reproducible_with_seed() {
    let cli = CliRunner::new();
    let args = [
        "sim", "--coins", "0.5,0.2,0.05", "--trials", "20000", "--seed", "7", "--tolerance", "1",
    ];
    let first = cli.run(&args);
    let second = cli.run(&args);
    assert_eq!(first.exit_code, 0);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_flag_is_accepted_anywhere() {
    let cli = CliRunner::new();
    assert_eq!(cli.run(&["--verbose", "solve", "--coins", "0.5"]).exit_code, 0);
    assert_eq!(cli.run(&["solve", "--coins", "0.5", "--verbose"]).exit_code, 0);
}

#[test]
fn version_goes_to_stdout() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("royale"));
}
