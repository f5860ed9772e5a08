//! # rpsls CLI Library
//!
//! Command-line shell around the rpsls rule engine and opponents. The core
//! (rule set, evaluator, adaptive opponent) lives in `rpsls-engine` and
//! `rpsls-ai`; this crate only reads input, prints results, and maps errors
//! to exit codes.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive rounds against the computer
//! - `sim`: Non-interactive rounds against a uniform random player
//! - `verify`: Check that a rule file is a complete tournament
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, RpslsCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_sim_command, handle_verify_command,
};

pub use cli::Strategy;
pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors (including rule files that fail to load)
///
/// # Example
///
/// ```no_run
/// use std::io;
/// let args = vec!["rpsls", "verify", "--rules", "victories.toml"];
/// let code = rpsls_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "verify", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RpslsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "rpsls: Rock-Paper-Scissors-Lizard-Spock");
            write_or_exit!(err, "Usage: rpsls <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: rpsls --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play { game } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&game, out, err, &mut stdin_lock)
        }
        Commands::Sim { rounds, game } => handle_sim_command(rounds, &game, out, err),
        Commands::Verify { rules } => handle_verify_command(rules, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // Handlers report these themselves before returning
        Err(CliError::Rules(_) | CliError::Config(_) | CliError::InvalidInput(_)) => {
            exit_code::ERROR
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
