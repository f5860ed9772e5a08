use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::ruleset::RuleSet;

/// Result of a round from the perspective of the player who moved first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// Outcome of comparing two moves together with the text explaining it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub description: String,
}

/// Decides the round between `first` and `second` under `rules`.
///
/// Resolution order:
/// 1. Identical moves tie without consulting the rules.
/// 2. A rule `(first, second)` means `first` wins with that rule's text.
/// 3. A rule `(second, first)` means `first` loses with that rule's text.
/// 4. A pair with no rule in either direction is an unresolved pair and
///    always goes to `second`, described as a win by default. This is a
///    fixed policy, never an error, so custom rule files stay playable.
///
/// # Examples
///
/// ```
/// use rpsls_engine::moves::Move;
/// use rpsls_engine::outcome::{evaluate, Outcome};
/// use rpsls_engine::ruleset::RuleSet;
///
/// let rules = RuleSet::from_rules([(Move::Lizard, Move::Spock, "Lizard poisons Spock")]).unwrap();
///
/// let e = evaluate(Move::Lizard, Move::Spock, &rules);
/// assert_eq!(e.outcome, Outcome::Win);
/// assert_eq!(e.description, "Lizard poisons Spock");
///
/// let e = evaluate(Move::Spock, Move::Lizard, &rules);
/// assert_eq!(e.outcome, Outcome::Loss);
///
/// // No rule either way: the second mover wins.
/// let e = evaluate(Move::Rock, Move::Paper, &rules);
/// assert_eq!(e.outcome, Outcome::Loss);
/// assert_eq!(e.description, "Paper wins by default");
/// ```
pub fn evaluate(first: Move, second: Move, rules: &RuleSet) -> Evaluation {
    if first == second {
        return Evaluation {
            outcome: Outcome::Tie,
            description: draw_description(first),
        };
    }
    if let Some(text) = rules.describe(first, second) {
        return Evaluation {
            outcome: Outcome::Win,
            description: text.to_string(),
        };
    }
    match rules.describe(second, first) {
        Some(text) => Evaluation {
            outcome: Outcome::Loss,
            description: text.to_string(),
        },
        None => Evaluation {
            outcome: Outcome::Loss,
            description: unresolved_description(second),
        },
    }
}

pub fn draw_description(shared: Move) -> String {
    format!("Both players picked {}. Draw game!", shared)
}

pub fn unresolved_description(second: Move) -> String {
    format!("{} wins by default", second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_moves_tie_even_with_empty_rules() {
        let rules = RuleSet::default();
        for m in Move::ALL {
            let e = evaluate(m, m, &rules);
            assert_eq!(e.outcome, Outcome::Tie);
            assert!(e.description.contains(m.name()));
            assert!(e.description.contains("Draw game!"));
        }
    }

    #[test]
    fn rule_direction_decides_win_or_loss() {
        let rules =
            RuleSet::from_rules([(Move::Scissors, Move::Paper, "Scissors cuts Paper")]).unwrap();
        assert_eq!(
            evaluate(Move::Scissors, Move::Paper, &rules),
            Evaluation {
                outcome: Outcome::Win,
                description: "Scissors cuts Paper".into()
            }
        );
        assert_eq!(
            evaluate(Move::Paper, Move::Scissors, &rules),
            Evaluation {
                outcome: Outcome::Loss,
                description: "Scissors cuts Paper".into()
            }
        );
    }

    #[test]
    fn unresolved_pair_defaults_to_second_mover() {
        let rules = RuleSet::default();
        let e = evaluate(Move::Spock, Move::Lizard, &rules);
        assert_eq!(e.outcome, Outcome::Loss);
        assert_eq!(e.description, unresolved_description(Move::Lizard));
        // deterministic
        assert_eq!(e, evaluate(Move::Spock, Move::Lizard, &rules));
    }

    #[test]
    fn contradictory_pair_prefers_first_mover_rule() {
        let rules = RuleSet::from_rules([
            (Move::Rock, Move::Paper, "odd rule"),
            (Move::Paper, Move::Rock, "Paper covers Rock"),
        ])
        .unwrap();
        assert_eq!(evaluate(Move::Rock, Move::Paper, &rules).outcome, Outcome::Win);
        assert_eq!(evaluate(Move::Paper, Move::Rock, &rules).outcome, Outcome::Win);
    }
}
