//! Exit codes: 0 on success, 2 on any error, 3 when a cross-check fails.
//! Errors always go to stderr.

mod helpers;

use helpers::cli_runner::CliRunner;
use royale_cli::exit_code;

#[test]
fn invalid_coin_returns_two() {
    let res = CliRunner::new().run(&["solve", "--coins", "0.5,1.2"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.starts_with("Error: Invalid input:"), "stderr={}", res.stderr);
}

#[test]
fn non_numeric_coin_returns_two() {
    let res = CliRunner::new().run(&["fair", "--coins", "heads"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
    assert!(res.stderr.contains("not a number"));
}

#[test]
fn never_ending_game_returns_two() {
    let res = CliRunner::new().run(&["solve", "--coins", "0,0"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
    assert!(res.stderr.starts_with("Error: Engine error:"), "stderr={}", res.stderr);
}

#[test]
fn unknown_subcommand_returns_two() {
    let res = CliRunner::new().run(&["deal"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
    assert!(res.stderr.contains("Usage: royale <command> [options]"));
}

#[test]
fn missing_required_flag_returns_two() {
    let res = CliRunner::new().run(&["sim"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
}

#[test]
fn failed_cross_check_returns_three() {
    let res = CliRunner::new().run(&[
        "sim", "--coins", "0.5,0.5", "--trials", "7", "--seed", "3", "--tolerance", "1e-9",
    ]);
    assert_eq!(res.exit_code, exit_code::CROSS_CHECK_FAILED);
    assert!(res.stdout.contains("Cross-check: FAILED"));
    assert!(res.stderr.contains("Error: Cross-check failed:"));
}

#[test]
fn zero_trials_returns_two() {
    let res = CliRunner::new().run(&["sim", "--coins", "0.5,0.5", "--trials", "0"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
}
