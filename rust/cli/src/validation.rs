//! Input parsing and validation for interactive commands.
//!
//! Invalid input never reaches the game core: the session loop reports it
//! and prompts again, leaving the move history untouched.

use rpsls_engine::moves::Move;

/// Result of parsing one line typed at the move prompt.
#[derive(Debug, PartialEq)]
pub enum SelectionResult {
    /// Valid move chosen by ordinal
    Move(Move),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a move selection.
///
/// Accepts a move ordinal in `0..=4`, or `q`/`quit` (case-insensitive).
///
/// # Example
///
/// ```rust
/// # use rpsls_cli::validation::{parse_move_selection, SelectionResult};
/// use rpsls_engine::moves::Move;
///
/// assert_eq!(parse_move_selection("4"), SelectionResult::Move(Move::Spock));
/// assert_eq!(parse_move_selection("Q"), SelectionResult::Quit);
///
/// match parse_move_selection("7") {
///     SelectionResult::Invalid(msg) => assert!(msg.contains("[0, 4]")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move_selection(input: &str) -> SelectionResult {
    let input = input.trim();
    if input.is_empty() {
        return SelectionResult::Invalid(invalid_selection_message("empty input"));
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return SelectionResult::Quit;
    }
    match input.parse::<u8>().ok().map(Move::try_from) {
        Some(Ok(m)) => SelectionResult::Move(m),
        _ => SelectionResult::Invalid(invalid_selection_message(&format!("'{}'", input))),
    }
}

/// Selection result for a line that could not be decoded as text.
pub fn unreadable_selection() -> SelectionResult {
    SelectionResult::Invalid(invalid_selection_message("(input is not valid UTF-8)"))
}

/// Only a case-insensitive "y" continues the session.
pub fn wants_another_round(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

fn invalid_selection_message(what: &str) -> String {
    format!(
        "Invalid selection {}. Pick a choice in range [0, {}]!",
        what,
        Move::max_ordinal()
    )
}
