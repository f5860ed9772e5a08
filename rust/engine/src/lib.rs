//! # rpsls-engine: Rock-Paper-Scissors-Lizard-Spock Rule Engine
//!
//! Data-driven rules for the five-move game. Victory relations are loaded
//! from an external rule file instead of being hard-coded, so the same
//! engine can run the canonical game or any custom variant.
//!
//! ## Core Modules
//!
//! - [`moves`] - The closed [`moves::Move`] enumeration and its ordinals
//! - [`ruleset`] - Loading and querying the `(winner, loser) -> text` relation
//! - [`outcome`] - Deciding Win/Loss/Tie for a pair of moves
//! - [`history`] - Append-only per-session move history
//! - [`game`] - Per-session outcome tally
//! - [`errors`] - Error types for rule loading and move parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use rpsls_engine::moves::Move;
//! use rpsls_engine::outcome::{evaluate, Outcome};
//! use rpsls_engine::ruleset::RuleSet;
//!
//! let src = r#"
//! [[victory]]
//! choice = "Rock"
//! against = "Scissors"
//! text = "Rock crushes Scissors"
//! "#;
//! let rules = RuleSet::from_toml_str(src, "inline").unwrap();
//!
//! let result = evaluate(Move::Rock, Move::Scissors, &rules);
//! assert_eq!(result.outcome, Outcome::Win);
//! assert_eq!(result.description, "Rock crushes Scissors");
//! ```
//!
//! ## Rule Coverage
//!
//! Rule files are not required to resolve every pair. Pairs without a rule
//! in either direction go to the second mover (see [`outcome::evaluate`]),
//! and [`ruleset::RuleSet::is_tournament`] reports whether a file is complete:
//!
//! ```rust
//! use rpsls_engine::moves::Move;
//! use rpsls_engine::ruleset::RuleSet;
//!
//! let partial = RuleSet::from_rules([(Move::Paper, Move::Rock, "Paper covers Rock")]).unwrap();
//! assert!(!partial.is_tournament());
//! assert_eq!(partial.unresolved_pairs().len(), 9);
//! ```

pub mod errors;
pub mod game;
pub mod history;
pub mod moves;
pub mod outcome;
pub mod ruleset;
