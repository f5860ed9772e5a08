//! # Play Command
//!
//! Interactive rounds against the computer.
//!
//! Each round runs to completion before the next begins:
//!
//! 1. Prompt for a move ordinal; invalid input is reported and re-prompted
//! 2. Append the move to the player's history
//! 3. Let the opponent pick from that history
//! 4. Evaluate the round and update the session tally
//! 5. Ask whether to play another round (only "y" continues)
//!
//! `q`/`quit` at the move prompt, or EOF on stdin, ends the session
//! gracefully. Rules are loaded before the first prompt; if they fail to
//! load, no round is ever played.

use crate::cli::GameArgs;
use crate::commands::{build_opponent, load_session_setup};
use crate::error::CliError;
use crate::formatters::{format_choice_prompt, format_evaluation, format_tally};
use crate::io_utils::{InputLine, read_stdin_line};
use crate::ui;
use crate::validation::{
    SelectionResult, parse_move_selection, unreadable_selection, wants_another_round,
};
use rpsls_engine::game::Tally;
use rpsls_engine::history::MoveHistory;
use rpsls_engine::outcome::evaluate;
use std::io::{BufRead, Write};

/// Handle the play command: interactive session against the computer.
///
/// # Arguments
///
/// * `game` - Rule file, seed, opponent and window overrides
/// * `out` - Output stream for prompts and round results
/// * `err` - Error stream for invalid input and load failures
/// * `stdin` - Input stream for move selections and continue answers
///
/// # Returns
///
/// * `Ok(())` when the session ends normally (declined, quit, or EOF)
/// * `Err(CliError)` if configuration or rules fail to load, or on I/O errors
///
/// # Examples
///
/// ```no_run
/// use rpsls_cli::cli::GameArgs;
/// use rpsls_cli::commands::handle_play_command;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(&GameArgs::default(), &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    game: &GameArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let (config, rules) = load_session_setup(game, err)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut opponent = build_opponent(&config, &rules, seed, err)?;

    writeln!(
        out,
        "play: opponent={} seed={} rules={}",
        opponent.name(),
        seed,
        config.rules
    )?;

    let prompt = format_choice_prompt();
    let mut history = MoveHistory::new();
    let mut tally = Tally::default();

    'session: loop {
        let player = loop {
            write!(out, "\n{}", prompt)?;
            out.flush()?;
            let selection = match read_stdin_line(stdin) {
                InputLine::Text(line) => parse_move_selection(&line),
                InputLine::NotUtf8 => unreadable_selection(),
                InputLine::Closed => break 'session,
            };
            match selection {
                SelectionResult::Move(m) => break m,
                SelectionResult::Quit => break 'session,
                SelectionResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        };

        history.push(player);
        let computer = opponent.choose_move(history.as_slice());
        writeln!(out, "Computer picked {}.", computer)?;

        let evaluation = evaluate(player, computer, &rules);
        writeln!(out, "{}", format_evaluation(&evaluation))?;
        tally.record(evaluation.outcome);
        tracing::debug!(
            round = history.len(),
            %player,
            %computer,
            outcome = ?evaluation.outcome,
            "round complete"
        );

        write!(out, "\nAnother round? (y/n): ")?;
        out.flush()?;
        match read_stdin_line(stdin) {
            InputLine::Text(answer) if wants_another_round(&answer) => {}
            _ => break,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", format_tally(&tally))?;
    Ok(())
}
