//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: `CliRunner` drives `royale_cli::run` in-process and captures
//!   stdout, stderr and the exit code, optionally with temporary env vars.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let res = CliRunner::new().run(&["solve", "--coins", "0.3,0.6"]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
