use crate::moves::Move;

/// Append-only record of the moves a player has made, oldest first.
///
/// Entries are never removed; consumers that only care about recent play
/// read a suffix of [`MoveHistory::as_slice`] with [`recent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// The last `min(n, moves.len())` entries of `moves`.
///
/// ```
/// use rpsls_engine::history::recent;
/// use rpsls_engine::moves::Move::*;
///
/// assert_eq!(recent(&[Rock, Paper, Spock], 2), &[Paper, Spock]);
/// assert_eq!(recent(&[Rock], 5), &[Rock]);
/// ```
pub fn recent(moves: &[Move], n: usize) -> &[Move] {
    &moves[moves.len().saturating_sub(n)..]
}
