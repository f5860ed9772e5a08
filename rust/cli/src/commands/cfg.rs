//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! rpsls configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "rules": {
//!     "value": "victories.toml",
//!     "source": "default"
//!   },
//!   "window": {
//!     "value": 5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "rules": {
            "value": config.rules,
            "source": sources.rules,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "window": {
            "value": config.window,
            "source": sources.window,
        },
        "opponent": {
            "value": config.opponent,
            "source": sources.opponent,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");

        for key in ["rules", "seed", "window", "opponent"] {
            assert!(json.get(key).is_some(), "should contain {}", key);
            assert!(json[key].get("source").is_some(), "{} should have a source", key);
        }
        assert!(err.is_empty(), "should not write to stderr on success");
    }
}
