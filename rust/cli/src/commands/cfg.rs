//! Configuration command handler.
//!
//! Displays the resolved settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "trials": {
//!     "value": 1000000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "trials": {
            "value": config.trials,
            "source": sources.trials,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "tolerance": {
            "value": config.tolerance,
            "source": sources.tolerance,
        },
        "precision": {
            "value": config.precision,
            "source": sources.precision,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_displays_every_setting() {
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in ["trials", "seed", "tolerance", "precision"] {
            assert!(json[key].get("value").is_some(), "missing {key}");
            assert!(json[key].get("source").is_some(), "missing {key} source");
        }
        assert!(output.contains('\n'), "output should be pretty-printed");
    }
}
