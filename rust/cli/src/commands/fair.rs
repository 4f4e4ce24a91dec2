//! Fairness check: does a better coin always mean better odds?

use crate::commands::coins_arg;
use crate::error::CliError;
use crate::formatters::{format_player, format_ranks};
use royale_engine::{Coins, FairnessRanking, solver::solve_coins};
use std::io::Write;

/// Handle the fair command.
///
/// Prints both rankings and every seat whose win rank differs from its
/// skill rank.
pub fn handle_fair_command(coins: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let coins = Coins::new(coins_arg(coins)?)?;
    let (wins, _) = solve_coins(&coins)?;
    let ranking = FairnessRanking::from_game(&coins, &wins)?;

    writeln!(out, "Skill ranks: {}", format_ranks(ranking.skill_ranks()))?;
    writeln!(out, "Win ranks:   {}", format_ranks(ranking.win_ranks()))?;

    if ranking.is_fair() {
        writeln!(out, "Fair: yes")?;
        return Ok(());
    }

    writeln!(out, "Fair: no")?;
    for ((player, skill), win) in ranking
        .players()
        .iter()
        .zip(ranking.skill_ranks())
        .zip(ranking.win_ranks())
        .filter(|((_, skill), win)| skill != win)
    {
        writeln!(
            out,
            "  {} skill rank {} but win rank {}",
            format_player(*player),
            skill,
            win
        )?;
    }
    Ok(())
}
