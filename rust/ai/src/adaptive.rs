//! Frequency-counter opponent.
//!
//! Looks at the player's most recent moves, takes the most frequent one as
//! the likely next move, and answers with a move the rule set says beats it.

use crate::{Opponent, uniform_move};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha20Rng;
use rpsls_engine::history::recent;
use rpsls_engine::moves::Move;
use rpsls_engine::ruleset::RuleSet;
use std::sync::Arc;

/// Opponent that counters the player's most frequent recent move.
///
/// # Strategy
///
/// - Empty history: uniform random move.
/// - Otherwise take the last `window` moves (fewer if the history is
///   shorter) and find their mode with [`most_frequent`].
/// - Pick uniformly among the moves that beat the mode under the rule set.
/// - If nothing in the rule set beats the mode, fall back to a uniform
///   random move.
///
/// Only single-move frequency is modelled; sequences and the opponent's own
/// past choices are ignored.
///
/// # Example
///
/// ```rust
/// use rpsls_ai::Opponent;
/// use rpsls_ai::adaptive::AdaptiveOpponent;
/// use rpsls_engine::moves::Move;
/// use rpsls_engine::ruleset::RuleSet;
/// use std::sync::Arc;
///
/// let rules = Arc::new(RuleSet::from_rules([
///     (Move::Paper, Move::Rock, "Paper covers Rock"),
/// ]).unwrap());
/// let mut ai = AdaptiveOpponent::new(rules, Some(7));
/// assert_eq!(ai.choose_move(&[Move::Rock, Move::Rock]), Move::Paper);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveOpponent {
    rules: Arc<RuleSet>,
    window: usize,
    rng: ChaCha20Rng,
}

impl AdaptiveOpponent {
    /// Number of recent player moves consulted by default.
    pub const DEFAULT_WINDOW: usize = 5;

    /// Create an opponent over `rules`. A `None` seed draws one at random.
    pub fn new(rules: Arc<RuleSet>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rules,
            window: Self::DEFAULT_WINDOW,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Consult the last `window` moves instead of the default. Clamped to >= 1.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// The move this opponent expects the player to repeat, if any history exists.
    pub fn predicted_move(&self, history: &[Move]) -> Option<Move> {
        most_frequent(recent(history, self.window))
    }
}

impl Opponent for AdaptiveOpponent {
    fn choose_move(&mut self, history: &[Move]) -> Move {
        let Some(target) = self.predicted_move(history) else {
            return uniform_move(&mut self.rng);
        };
        let counters = self.rules.winners_against(target);
        match counters.choose(&mut self.rng) {
            Some(&m) => {
                tracing::debug!(
                    target_move = %target,
                    ?counters,
                    chosen = %m,
                    "countering most frequent recent move"
                );
                m
            }
            None => {
                let m = uniform_move(&mut self.rng);
                tracing::debug!(
                    target_move = %target,
                    chosen = %m,
                    "no recorded counter, playing random move"
                );
                m
            }
        }
    }

    fn name(&self) -> &str {
        "AdaptiveAI"
    }
}

/// Statistical mode of `window`.
///
/// Ties go to the tied move encountered first when scanning from the oldest
/// entry to the newest. Returns `None` for an empty window.
///
/// ```
/// use rpsls_ai::adaptive::most_frequent;
/// use rpsls_engine::moves::Move::*;
///
/// assert_eq!(most_frequent(&[Rock, Rock, Rock, Paper, Rock]), Some(Rock));
/// assert_eq!(most_frequent(&[Spock, Paper, Paper, Spock]), Some(Spock));
/// assert_eq!(most_frequent(&[]), None);
/// ```
pub fn most_frequent(window: &[Move]) -> Option<Move> {
    let mut counts = [0usize; Move::ALL.len()];
    for m in window {
        counts[m.ordinal() as usize] += 1;
    }
    let mut best: Option<(Move, usize)> = None;
    for &m in window {
        let count = counts[m.ordinal() as usize];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((m, count));
        }
    }
    best.map(|(m, _)| m)
}
