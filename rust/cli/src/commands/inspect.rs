//! Walks one step of the game tree from the opening circle.
//!
//! Shows what the analytic solver sees at the root: how likely each seat's
//! turn fails, who each seat would shoot, where the probability mass leaves
//! the circle and which smaller circles it lands in.

use crate::commands::coins_arg;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_arrangement, format_player, format_probabilities, format_probability};
use royale_engine::solver::child_cycles;
use royale_engine::{Coins, CycleModel};
use std::io::Write;

/// Handle the inspect command: the opening circle in full, the circles it
/// feeds, then the first of those in full.
pub fn handle_inspect_command(coins: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let coins = Coins::new(coins_arg(coins)?)?;
    let precision = config::load()?.precision;
    let root = CycleModel::root(&coins)?;

    if !write_cycle(&root, precision, out)? {
        return Ok(());
    }

    let children = child_cycles(&root)?;
    writeln!(out, "Children:")?;
    for child in &children {
        writeln!(
            out,
            "  {} inbound {}",
            format_arrangement(child.players()),
            format_probabilities(child.inbound_prob(), precision)
        )?;
    }

    if let Some(first) = children.first() {
        writeln!(out)?;
        write_cycle(first, precision, out)?;
    }
    Ok(())
}

/// Returns `false` when the cycle already has a victor.
fn write_cycle(cycle: &CycleModel<'_>, precision: usize, out: &mut dyn Write) -> Result<bool, CliError> {
    writeln!(out, "Cycle {}", format_arrangement(cycle.players()))?;
    if let Some(victor) = cycle.victor() {
        writeln!(out, "{} wins outright", format_player(victor))?;
        return Ok(false);
    }

    writeln!(
        out,
        "inbound    {}",
        format_probabilities(cycle.inbound_prob(), precision)
    )?;
    writeln!(
        out,
        "in-cycle   {}",
        format_probabilities(cycle.in_cycle_prob(), precision)
    )?;
    writeln!(
        out,
        "multiplier {}",
        format_probability(cycle.infinite_multiplier()?, precision)
    )?;

    writeln!(out, "Threats:")?;
    for (player, target) in cycle.player_threats()? {
        writeln!(out, "  {} -> {}", format_player(player), format_player(target))?;
    }

    writeln!(out, "Outbound:")?;
    for (arrangement, flow) in cycle.outbound_flows()? {
        writeln!(
            out,
            "  {} flow {}",
            format_arrangement(&arrangement),
            format_probability(flow, precision)
        )?;
    }
    Ok(true)
}
