//! Verify command handler module.
//!
//! Loads a rule file and checks tournament completeness: every pair of
//! distinct moves must have exactly one winning direction. Loading itself
//! tolerates gaps, so this is where incomplete or contradictory rule files
//! get caught before anyone plays with them.
//!
//! Findings are collected using the shared `BatchValidationError` pattern.

use crate::cli::GameArgs;
use crate::commands::load_rules;
use crate::config;
use crate::error::{BatchValidationError, CliError};
use crate::ui;
use rpsls_engine::moves::Move;
use std::io::Write;

/// Findings keyed by the pair of moves they concern, e.g. "Rock vs Lizard".
type VerifyError = BatchValidationError<String>;

/// Handle the verify command - validate a rule file.
///
/// Lists the loaded rules on `out`, then each unresolved or contradictory
/// pair on `err`.
///
/// # Returns
///
/// `Ok(())` if the rules form a complete tournament, otherwise an `Err` that
/// maps to exit code `2`.
pub fn handle_verify_command(
    rules: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let args = GameArgs {
        rules,
        ..GameArgs::default()
    };
    let path = match config::load_with_overrides(&args) {
        Ok(resolved) => resolved.config.rules,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let rules = load_rules(&path, err)?;

    writeln!(out, "Rules: {} entries from {}", rules.len(), path)?;
    for (winner, loser, text) in rules.iter() {
        writeln!(out, "  {} > {}: {}", winner, loser, text)?;
    }

    let mut errors: Vec<VerifyError> = Vec::new();
    for (a, b) in rules.unresolved_pairs() {
        errors.push(VerifyError {
            item_context: pair_label(a, b),
            message: "no rule in either direction".to_string(),
        });
    }
    for (a, b) in rules.contradictory_pairs() {
        errors.push(VerifyError {
            item_context: pair_label(a, b),
            message: "rules in both directions".to_string(),
        });
    }

    if errors.is_empty() {
        writeln!(
            out,
            "Verify: OK (complete tournament over {} moves)",
            Move::ALL.len()
        )?;
        return Ok(());
    }

    for e in &errors {
        ui::write_error(err, &e.to_string())?;
    }
    writeln!(out, "Verify: FAIL ({} issues)", errors.len())?;
    Err(CliError::InvalidInput(format!(
        "rule set is not a complete tournament ({} issues)",
        errors.len()
    )))
}

fn pair_label(a: Move, b: Move) -> String {
    format!("{} vs {}", a, b)
}
