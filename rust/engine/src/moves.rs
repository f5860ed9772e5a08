use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MoveError;

/// One of the five selectable game actions.
/// The discriminant is the stable ordinal shown to players at the prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Move {
    /// Ordinal 0
    Rock = 0,
    /// Ordinal 1
    Paper,
    /// Ordinal 2
    Scissors,
    /// Ordinal 3
    Lizard,
    /// Ordinal 4
    Spock,
}

impl Move {
    /// Every move in ordinal order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Canonical, case-sensitive name used in rule sources.
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        }
    }

    pub fn max_ordinal() -> u8 {
        (Move::ALL.len() - 1) as u8
    }
}

impl TryFrom<u8> for Move {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or(MoveError::OrdinalOutOfRange { value })
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| MoveError::UnknownName {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
