//! Diagnostic logging for the CLI.
//!
//! Solver events go to stderr through a `tracing` fmt subscriber so they never
//! mix with command output on stdout. The filter comes from `ROYALE_LOG`
//! (same syntax as `RUST_LOG`) and falls back to `warn`, or `debug` with
//! `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ROYALE_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "royale_engine=debug,royale_cli=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Later calls are no-ops, so `run` can be
/// invoked repeatedly from tests.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
