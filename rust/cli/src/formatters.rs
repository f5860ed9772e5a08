//! Move, round, and session formatters for terminal display.
//!
//! Pure functions only; callers decide which stream the text goes to.
//!
//! ## Example
//!
//! ```rust
//! use rpsls_cli::formatters::format_choice_prompt;
//!
//! assert_eq!(
//!     format_choice_prompt(),
//!     "Pick a choice (Rock[0], Paper[1], Scissors[2], Lizard[3], Spock[4]): "
//! );
//! ```

use rpsls_engine::game::Tally;
use rpsls_engine::moves::Move;
use rpsls_engine::outcome::{Evaluation, Outcome};

/// Prompt listing every move with its ordinal.
pub fn format_choice_prompt() -> String {
    let choices: Vec<String> = Move::ALL
        .iter()
        .map(|m| format!("{}[{}]", m, m.ordinal()))
        .collect();
    format!("Pick a choice ({}): ", choices.join(", "))
}

/// Round result as seen by the human player (the first mover).
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    match evaluation.outcome {
        Outcome::Win => format!("{}. You won!", evaluation.description),
        Outcome::Loss => format!("{}. You lost!", evaluation.description),
        Outcome::Tie => evaluation.description.clone(),
    }
}

pub fn format_tally(tally: &Tally) -> String {
    format!(
        "Rounds played: {} (wins={} losses={} ties={})",
        tally.rounds(),
        tally.wins,
        tally.losses,
        tally.ties
    )
}
