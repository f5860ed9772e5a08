//! Uniform random opponent, used as a control against the adaptive strategy.

use crate::{Opponent, uniform_move};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rpsls_engine::moves::Move;

/// Plays each of the five moves with equal probability, ignoring history.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha20Rng,
}

impl RandomOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, _history: &[Move]) -> Move {
        uniform_move(&mut self.rng)
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_move() {
        let mut ai = RandomOpponent::new(Some(3));
        let mut seen = [false; 5];
        for _ in 0..200 {
            seen[ai.choose_move(&[]).ordinal() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
