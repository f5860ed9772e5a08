use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Unknown move name '{name}'")]
    UnknownName { name: String },
    #[error("Move ordinal {value} out of range [0, 4]")]
    OrdinalOutOfRange { value: u8 },
}

/// Failures while building a [`crate::ruleset::RuleSet`] from a rule source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule source not found: {path} ({reason})")]
    SourceNotFound { path: String, reason: String },
    #[error("Malformed rule source {origin}: {reason}")]
    SourceMalformed { origin: String, reason: String },
    #[error("Unknown move name '{name}' in rule source (expected Rock, Paper, Scissors, Lizard or Spock)")]
    UnknownMoveName { name: String },
}
