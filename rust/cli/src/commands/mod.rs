//! Command handler modules for the rpsls CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for `play`,
//!   the input stream (`&mut dyn BufRead`) are passed as parameters
//! - Error propagation: all errors propagated via `CliError`

mod cfg;
mod play;
mod sim;
mod verify;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use verify::handle_verify_command;

use crate::cli::GameArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use rpsls_ai::{Opponent, create_opponent};
use rpsls_engine::ruleset::RuleSet;
use std::io::Write;
use std::sync::Arc;

/// Resolve configuration, then load the rule set it points to.
///
/// Failures are reported on `err` before being returned, so callers only
/// need to map them to an exit code.
pub(crate) fn load_session_setup(
    game: &GameArgs,
    err: &mut dyn Write,
) -> Result<(Config, Arc<RuleSet>), CliError> {
    let config = match config::load_with_overrides(game) {
        Ok(resolved) => resolved.config,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let rules = load_rules(&config.rules, err)?;
    if !rules.is_tournament() {
        tracing::warn!(
            unresolved = rules.unresolved_pairs().len(),
            contradictory = rules.contradictory_pairs().len(),
            "rule set is not a complete tournament; unresolved pairs go to the computer"
        );
    }
    Ok((config, Arc::new(rules)))
}

/// Build the configured opponent, reporting an unknown kind on `err`.
pub(crate) fn build_opponent(
    config: &Config,
    rules: &Arc<RuleSet>,
    seed: u64,
    err: &mut dyn Write,
) -> Result<Box<dyn Opponent>, CliError> {
    match create_opponent(&config.opponent, Arc::clone(rules), Some(seed), config.window) {
        Some(opponent) => Ok(opponent),
        None => {
            let msg = format!("unknown opponent '{}'", config.opponent);
            ui::write_error(err, &msg)?;
            Err(CliError::Config(msg))
        }
    }
}

pub(crate) fn load_rules(path: &str, err: &mut dyn Write) -> Result<RuleSet, CliError> {
    match RuleSet::load(path) {
        Ok(rules) => {
            tracing::info!(path, entries = rules.len(), "loaded rule set");
            Ok(rules)
        }
        Err(e) => {
            ui::write_error(err, &format!("Could not load rules: {}", e))?;
            Err(CliError::Rules(e))
        }
    }
}
