use royale_engine::{simulate, solve_game};

const TRIALS: u64 = 200_000;
const TOLERANCE: f64 = 0.01;

#[test]
fn simulation_agrees_with_three_player_solution() {
    let coins = [0.25, 0.5, 1.0];
    let exact = solve_game(&coins).unwrap();
    let estimate = simulate(&coins, TRIALS, 42).unwrap();
    let deviation = estimate.max_deviation(&exact);
    assert!(deviation < TOLERANCE, "deviation {deviation}");
}

#[test]
fn simulation_agrees_with_five_player_solution() {
    let coins = [0.5, 0.2, 0.05, 0.85, 0.1];
    let exact = solve_game(&coins).unwrap();
    let estimate = simulate(&coins, TRIALS, 2021).unwrap();
    let deviation = estimate.max_deviation(&exact);
    assert!(deviation < TOLERANCE, "deviation {deviation}");
}

#[test]
fn different_seeds_give_different_counts() {
    let a = simulate(&[0.5, 0.5, 0.5], 1_000, 1).unwrap();
    let b = simulate(&[0.5, 0.5, 0.5], 1_000, 2).unwrap();
    assert_ne!(a.wins, b.wins);
}
