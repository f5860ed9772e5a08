//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type collects findings with context for
//! commands that check many items at once, such as `verify` walking every
//! pair of moves in a rule file.

use rpsls_engine::errors::RuleError;
use std::fmt;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin reads, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The rule source could not be loaded
    Rules(RuleError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Rules(e) => write!(f, "Could not load rules: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Rules(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<RuleError> for CliError {
    fn from(error: RuleError) -> Self {
        CliError::Rules(error)
    }
}

/// Generic error type for batch validation operations.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item. Must implement `Display`
///   for error formatting.
///
/// # Examples
///
/// ```rust
/// use rpsls_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "Rock vs Lizard".to_string(),
///     message: "no rule in either direction".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rock vs Lizard: no rule in either direction");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_batch_validation_error_with_usize() {
        let error = BatchValidationError {
            item_context: 42,
            message: "Test error".to_string(),
        };
        assert_eq!(error.to_string(), "42: Test error");
    }

    #[test]
    fn test_rules_error_keeps_source() {
        let error = CliError::from(RuleError::UnknownMoveName {
            name: "Fire".into(),
        });
        assert!(error.to_string().contains("Fire"));
        assert!(error.source().is_some());
    }
}
