use royale_engine::player::PlayerId;
use royale_engine::solve_game;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "got {actual}, expected {expected}"
    );
}

#[test]
fn three_player_golden_values() {
    let wins = solve_game(&[0.25, 0.5, 1.0]).unwrap();
    assert_close(wins[&PlayerId(0)], 0.29375);
    assert_close(wins[&PlayerId(1)], 0.425);
    assert_close(wins[&PlayerId(2)], 0.28125);
}

#[test]
fn five_player_golden_values() {
    let wins = solve_game(&[0.5, 0.2, 0.05, 0.85, 0.1]).unwrap();
    let expected = [
        0.2441626530958875,
        0.18885344861503534,
        0.18867353771399362,
        0.1731665763529355,
        0.20514378422214835,
    ];
    for (seat, p) in expected.iter().enumerate() {
        assert_close(wins[&PlayerId(seat)], *p);
    }
}

#[test]
fn probabilities_sum_to_one() {
    let tables: &[&[f64]] = &[
        &[0.25, 0.5, 1.0],
        &[0.5, 0.5, 0.5],
        &[0.5, 0.2, 0.05, 0.85, 0.1],
        &[0.035, 0.008, 0.5, 0.9, 0.25, 0.017, 0.125, 0.07],
        &[1.0, 1.0, 1.0, 1.0],
        &[0.9, 0.0, 0.3],
    ];
    for coins in tables {
        let wins = solve_game(coins).unwrap();
        assert_eq!(wins.len(), coins.len());
        let total: f64 = wins.values().sum();
        assert!((total - 1.0).abs() < TOLERANCE, "{coins:?} sums to {total}");
    }
}

#[test]
fn single_player_takes_everything() {
    for coin in [0.0, 0.4, 1.0] {
        let wins = solve_game(&[coin]).unwrap();
        assert_eq!(wins[&PlayerId(0)], 1.0);
    }
}

#[test]
fn sure_coins_favour_the_last_seat() {
    // P0 removes P1, P2 removes P0.
    let wins = solve_game(&[1.0, 1.0, 1.0]).unwrap();
    assert_eq!(wins[&PlayerId(2)], 1.0);
    assert_eq!(wins[&PlayerId(0)], 0.0);
    assert_eq!(wins[&PlayerId(1)], 0.0);
}

#[test]
fn solving_twice_is_bit_identical() {
    let coins = [0.035, 0.008, 0.5, 0.9, 0.25, 0.017, 0.125, 0.07];
    let a = solve_game(&coins).unwrap();
    let b = solve_game(&coins).unwrap();
    assert_eq!(a, b);
}
