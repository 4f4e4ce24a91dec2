//! Monte Carlo cross-check of the exact solution.
//!
//! Plays the table `trials` times with a seeded ChaCha20 stream and compares
//! the observed win frequencies with the analytic probabilities. Flags
//! override the configuration; without any seed a fresh one is drawn and
//! printed so the run can be reproduced.
//!
//! # Examples
//!
//! ```no_run
//! use royale_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command("0.25,0.5,1.0", Some(100_000), Some(42), None, &mut out, &mut err).unwrap();
//! ```

use crate::commands::coins_arg;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_player, format_probability};
use crate::ui;
use royale_engine::{GameReport, PlayerId, simulate};
use std::io::Write;

/// Below this many trials the sampling error is comparable to the usual
/// tolerance.
const FEW_TRIALS: u64 = 10_000;

/// Handle the sim command.
///
/// # Errors
///
/// Returns `CliError::CrossCheck` when the largest deviation exceeds the
/// tolerance, after the comparison table has been printed.
pub fn handle_sim_command(
    coins: &str,
    trials: Option<u64>,
    seed: Option<u64>,
    tolerance: Option<f64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let coins = coins_arg(coins)?;
    let cfg = config::load()?;

    let trials = trials.unwrap_or(cfg.trials);
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be >= 1".to_string()));
    }
    let tolerance = tolerance.unwrap_or(cfg.tolerance);
    if !(tolerance > 0.0 && tolerance <= 1.0) {
        return Err(CliError::InvalidInput(
            "tolerance must be in (0, 1]".to_string(),
        ));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    if trials < FEW_TRIALS {
        ui::display_warning(
            err,
            &format!("only {} trials; the cross-check is unreliable", trials),
        )?;
    }

    let estimate = simulate(&coins, trials, seed)?;
    let report = GameReport::solve(&coins)?.with_cross_check(&estimate, tolerance);
    let Some(check) = report.cross_check.as_ref() else {
        return Err(CliError::CrossCheck("no estimate attached".to_string()));
    };

    let precision = cfg.precision;
    writeln!(out, "Trials: {}  Seed: {}", check.trials, check.seed)?;
    for (seat, (exact, simulated)) in report
        .win_probabilities
        .iter()
        .zip(&check.frequencies)
        .enumerate()
    {
        writeln!(
            out,
            "{:<4} exact {}  simulated {}  diff {}",
            format_player(PlayerId(seat)),
            format_probability(*exact, precision),
            format_probability(*simulated, precision),
            format_probability((simulated - exact).abs(), precision)
        )?;
    }
    writeln!(
        out,
        "Max deviation: {} (tolerance {})",
        format_probability(check.max_deviation, precision),
        check.tolerance
    )?;

    if check.within_tolerance {
        writeln!(out, "Cross-check: OK")?;
        Ok(())
    } else {
        writeln!(out, "Cross-check: FAILED")?;
        Err(CliError::CrossCheck(format!(
            "max deviation {} exceeds tolerance {}",
            check.max_deviation, check.tolerance
        )))
    }
}
