//! Command-line definitions for the `royale` binary.

use clap::{Parser, Subcommand};

use crate::Format;

#[derive(Parser, Debug)]
#[command(
    name = "royale",
    version,
    about = "Exact odds for coin-toss battle royale games"
)]
pub struct RoyaleCli {
    /// Log solver decisions to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a game exactly; seat 0 acts first
    Solve {
        /// Coin probabilities in seat order, e.g. 0.25,0.5,1.0
        #[arg(long)]
        coins: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Decimal places in text output
        #[arg(long)]
        precision: Option<usize>,
    },
    /// Compare coin ranking with win ranking
    Fair {
        #[arg(long)]
        coins: String,
    },
    /// Cross-check the exact solution with a Monte Carlo run
    Sim {
        #[arg(long)]
        coins: String,
        #[arg(long)]
        trials: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Show threats and outbound flow of the opening circle
    Inspect {
        #[arg(long)]
        coins: String,
    },
    /// Solve one coin list per line and write JSONL reports
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        output: Option<String>,
    },
    /// Display current configuration settings
    Cfg,
}
