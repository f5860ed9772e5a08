//! Simulation command handler.
//!
//! Plays the configured opponent against a uniform random player for a fixed
//! number of rounds, with no terminal interaction. Useful for checking how a
//! rule file and strategy behave before playing them by hand. Against a
//! random player no strategy can do better than break even on average.

use crate::cli::GameArgs;
use crate::commands::{build_opponent, load_session_setup};
use crate::error::CliError;
use crate::formatters::format_tally;
use crate::ui;
use rpsls_ai::random::RandomOpponent;
use rpsls_ai::Opponent;
use rpsls_engine::game::Tally;
use rpsls_engine::history::MoveHistory;
use rpsls_engine::outcome::evaluate;
use std::io::Write;

/// Handle the sim command.
///
/// The random player's seed is derived from the session seed, so a fixed
/// `--seed` reproduces the whole simulation.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for zero rounds, and the same load errors
/// as `play` when configuration or rules are invalid.
pub fn handle_sim_command(
    rounds: u32,
    game: &GameArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let (config, rules) = load_session_setup(game, err)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut computer = build_opponent(&config, &rules, seed, err)?;
    let mut player = RandomOpponent::new(Some(seed.wrapping_add(1)));

    writeln!(
        out,
        "sim: opponent={} rounds={} seed={} rules={}",
        computer.name(),
        rounds,
        seed,
        config.rules
    )?;

    let mut history = MoveHistory::new();
    let mut tally = Tally::default();
    for _ in 0..rounds {
        let p = player.choose_move(history.as_slice());
        history.push(p);
        let c = computer.choose_move(history.as_slice());
        tally.record(evaluate(p, c, &rules).outcome);
    }

    writeln!(out, "Player wins: {}", tally.wins)?;
    writeln!(out, "Computer wins: {}", tally.losses)?;
    writeln!(out, "Ties: {}", tally.ties)?;
    writeln!(out, "{}", format_tally(&tally))?;
    Ok(())
}
