//! # Royale CLI Library
//!
//! Command-line driver for the coin-toss battle royale solver. It sources coin
//! tables from arguments or files, runs the analytic engine and presents the
//! results.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["royale", "solve", "--coins", "0.25,0.5,1.0"];
//! let code = royale_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `solve`: Exact win probability for every player
//! - `fair`: Whether stronger coins translate into better odds
//! - `sim`: Monte Carlo cross-check of the exact solution
//! - `inspect`: Threats and outbound flow of the opening circle
//! - `batch`: Solve many tables from a file into JSONL reports
//! - `cfg`: Display current configuration settings

use clap::{Parser, ValueEnum};
use std::io::Write;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, RoyaleCli};

use commands::{
    handle_batch_command, handle_cfg_command, handle_fair_command, handle_inspect_command,
    handle_sim_command, handle_solve_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `3` when a Monte Carlo
/// cross-check exceeds its tolerance
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["royale", "fair", "--coins", "0.3,0.6"];
/// let code = royale_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["solve", "fair", "sim", "inspect", "batch", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RoyaleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Royale CLI");
                    write_or_exit!(err, "Usage: royale <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: royale --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Solve {
            coins,
            format,
            precision,
        } => handle_solve_command(&coins, format, precision, out),
        Commands::Fair { coins } => handle_fair_command(&coins, out),
        Commands::Sim {
            coins,
            trials,
            seed,
            tolerance,
        } => handle_sim_command(&coins, trials, seed, tolerance, out, err),
        Commands::Inspect { coins } => handle_inspect_command(&coins, out),
        Commands::Batch { input, output } => {
            handle_batch_command(&input, output.as_deref(), out, err)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            match e {
                CliError::CrossCheck(_) => exit_code::CROSS_CHECK_FAILED,
                _ => exit_code::ERROR,
            }
        }
    }
}

/// Output format for the `solve` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable table
    Text,
    /// Single-line JSON report
    Json,
}

impl Format {
    /// Returns the string representation of the format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use royale_cli::Format;
    /// assert_eq!(Format::Json.as_str(), "json");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}
