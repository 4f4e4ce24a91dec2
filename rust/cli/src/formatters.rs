//! Formatters for players, probabilities and rankings in terminal output.
//!
//! ## Example
//!
//! ```rust
//! use royale_engine::PlayerId;
//! use royale_cli::formatters::{format_arrangement, format_probability};
//!
//! assert_eq!(format_probability(0.29375, 4), "0.2938");
//! assert_eq!(format_arrangement(&[PlayerId(1), PlayerId(0)]), "[P1 P0]");
//! ```

use royale_engine::PlayerId;

/// Format a player as `P<seat>`.
pub fn format_player(player: PlayerId) -> String {
    format!("P{}", player.index())
}

/// Format a probability with a fixed number of decimals.
pub fn format_probability(p: f64, precision: usize) -> String {
    format!("{:.*}", precision, p)
}

/// Format an arrangement in bracket notation, acting player first.
pub fn format_arrangement(players: &[PlayerId]) -> String {
    let names: Vec<String> = players.iter().copied().map(format_player).collect();
    format!("[{}]", names.join(" "))
}

/// Format a probability vector in bracket notation.
pub fn format_probabilities(values: &[f64], precision: usize) -> String {
    let cells: Vec<String> = values
        .iter()
        .map(|p| format_probability(*p, precision))
        .collect();
    format!("[{}]", cells.join(", "))
}

/// Format a rank vector like `[2, 3, 1]`.
pub fn format_ranks(ranks: &[usize]) -> String {
    format!("{:?}", ranks)
}

/// One line of the win table: seat, coin and win probability.
pub fn format_win_row(player: PlayerId, coin: f64, win: f64, precision: usize) -> String {
    format!(
        "{:<4} coin {}  win {}",
        format_player(player),
        format_probability(coin, precision),
        format_probability(win, precision)
    )
}
