//! Exact solve of a single table.

use crate::Format;
use crate::commands::coins_arg;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_probability, format_ranks, format_win_row};
use royale_engine::{GameReport, PlayerId};
use std::io::Write;
use tracing::debug;

/// Handle the solve command: exact win probability for every seat.
///
/// `precision` overrides the configured number of decimals in text output;
/// JSON output always carries full precision.
pub fn handle_solve_command(
    coins: &str,
    format: Format,
    precision: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let coins = coins_arg(coins)?;
    let precision = match precision {
        Some(p) if p > 17 => {
            return Err(CliError::InvalidInput(
                "precision must be <=17".to_string(),
            ));
        }
        Some(p) => p,
        None => config::load()?.precision,
    };

    debug!(players = coins.len(), format = format.as_str(), precision, "solving table");
    let report = GameReport::solve(&coins)?;
    match format {
        Format::Json => {
            let line = report.to_json().map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        }
        Format::Text => write_text(&report, precision, out)?,
    }
    Ok(())
}

fn write_text(report: &GameReport, precision: usize, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Players: {} (P0 acts first)", report.coins.len())?;
    for (seat, (coin, win)) in report
        .coins
        .iter()
        .zip(&report.win_probabilities)
        .enumerate()
    {
        writeln!(out, "{}", format_win_row(PlayerId(seat), *coin, *win, precision))?;
    }
    let total: f64 = report.win_probabilities.iter().sum();
    writeln!(out, "Total: {}", format_probability(total, precision))?;
    writeln!(out, "Skill ranks: {}", format_ranks(&report.skill_ranks))?;
    writeln!(out, "Win ranks:   {}", format_ranks(&report.win_ranks))?;
    writeln!(out, "Fair: {}", if report.fair { "yes" } else { "no" })?;
    writeln!(
        out,
        "Cycles solved: {} (depth {})",
        report.stats.cycles_solved, report.stats.max_depth
    )
}
