//! Command handler modules for the Royale CLI.
//!
//! Each command lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via [`CliError`]; `run` prints them and picks the exit code
//!
//! # Example
//!
//! ```no_run
//! use royale_cli::commands::handle_solve_command;
//! use royale_cli::Format;
//! use std::io;
//!
//! let mut out = io::stdout();
//! handle_solve_command("0.25,0.5,1.0", Format::Text, None, &mut out).expect("Command failed");
//! ```

pub mod batch;
pub mod cfg;
pub mod fair;
pub mod inspect;
pub mod sim;
pub mod solve;

pub use batch::handle_batch_command;
pub use cfg::handle_cfg_command;
pub use fair::handle_fair_command;
pub use inspect::handle_inspect_command;
pub use sim::handle_sim_command;
pub use solve::handle_solve_command;

use crate::error::CliError;
use crate::validation::parse_coins;

/// Parses a `--coins` argument, reporting problems as invalid input.
pub(crate) fn coins_arg(raw: &str) -> Result<Vec<f64>, CliError> {
    parse_coins(raw).map_err(CliError::InvalidInput)
}
