//! # rpsls-ai: Computer Opponents
//!
//! Opponent strategies for Rock-Paper-Scissors-Lizard-Spock. Every strategy
//! implements the [`Opponent`] trait so the session loop can swap them freely.
//!
//! ## Core Components
//!
//! - [`Opponent`] - Trait for picking the computer's move from player history
//! - [`adaptive`] - Counters the player's most frequent recent move
//! - [`random`] - Uniform random control opponent
//! - [`create_opponent`] - Factory for opponents by kind string
//!
//! ## Quick Start
//!
//! ```rust
//! use rpsls_ai::{create_opponent, Opponent};
//! use rpsls_engine::moves::Move;
//! use rpsls_engine::ruleset::RuleSet;
//! use std::sync::Arc;
//!
//! let rules = Arc::new(RuleSet::from_rules([
//!     (Move::Spock, Move::Scissors, "Spock smashes Scissors"),
//! ]).unwrap());
//! let mut ai = create_opponent("adaptive", rules, Some(42), 5).expect("known kind");
//!
//! let history = [Move::Scissors, Move::Scissors, Move::Paper];
//! assert_eq!(ai.choose_move(&history), Move::Spock);
//! ```
//!
//! ## Opponent Kinds
//!
//! - `"adaptive"` - [`adaptive::AdaptiveOpponent`]
//! - `"random"` - [`random::RandomOpponent`]

use rand::Rng;
use rpsls_engine::moves::Move;
use rpsls_engine::ruleset::RuleSet;
use std::sync::Arc;

pub mod adaptive;
pub mod random;

/// Kind strings accepted by [`create_opponent`].
pub const OPPONENT_KINDS: &[&str] = &["adaptive", "random"];

/// Interface for computer opponents.
///
/// Strategies own their random state, hence `&mut self`. The rule set, when
/// needed, is shared read-only, so independent sessions can each own an
/// opponent over the same rules.
///
/// # Example Implementation
///
/// ```rust
/// use rpsls_ai::Opponent;
/// use rpsls_engine::moves::Move;
///
/// struct Mirror;
///
/// impl Opponent for Mirror {
///     fn choose_move(&mut self, history: &[Move]) -> Move {
///         history.last().copied().unwrap_or(Move::Rock)
///     }
///
///     fn name(&self) -> &str {
///         "Mirror"
///     }
/// }
/// ```
pub trait Opponent: Send {
    /// Pick the computer's move given the player's moves so far, oldest first.
    fn choose_move(&mut self, history: &[Move]) -> Move;

    /// Return the name/identifier of this opponent.
    fn name(&self) -> &str;
}

/// Create an opponent by kind string.
///
/// `window` is only used by the adaptive opponent. Returns `None` for a
/// kind not listed in [`OPPONENT_KINDS`].
///
/// ```rust
/// use rpsls_ai::create_opponent;
/// use rpsls_engine::ruleset::RuleSet;
/// use std::sync::Arc;
///
/// let rules = Arc::new(RuleSet::default());
/// assert_eq!(create_opponent("random", rules.clone(), None, 5).unwrap().name(), "RandomAI");
/// assert!(create_opponent("psychic", rules, None, 5).is_none());
/// ```
pub fn create_opponent(
    kind: &str,
    rules: Arc<RuleSet>,
    seed: Option<u64>,
    window: usize,
) -> Option<Box<dyn Opponent>> {
    match kind {
        "adaptive" => Some(Box::new(
            adaptive::AdaptiveOpponent::new(rules, seed).with_window(window),
        )),
        "random" => Some(Box::new(random::RandomOpponent::new(seed))),
        _ => None,
    }
}

pub(crate) fn uniform_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::ALL[rng.random_range(0..Move::ALL.len())]
}
