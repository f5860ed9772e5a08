use serde::Serialize;

use crate::outcome::Outcome;

/// Running count of round outcomes for one session.
/// Kept in memory only; nothing survives the process.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct Tally {
    /// Rounds won by the first mover (the human player)
    pub wins: u32,
    /// Rounds lost by the first mover
    pub losses: u32,
    /// Drawn rounds
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_each_outcome() {
        let mut t = Tally::default();
        t.record(Outcome::Win);
        t.record(Outcome::Loss);
        t.record(Outcome::Loss);
        t.record(Outcome::Tie);
        assert_eq!(
            t,
            Tally {
                wins: 1,
                losses: 2,
                ties: 1
            }
        );
        assert_eq!(t.rounds(), 4);
    }
}
