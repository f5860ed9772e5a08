//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "rpsls",
    version,
    about = "Rock-Paper-Scissors-Lizard-Spock against an adaptive computer opponent"
)]
pub struct RpslsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Options shared by the commands that actually play rounds.
///
/// Every field is optional; unset values come from the configuration layer
/// (`RPSLS_CONFIG` file, then `RPSLS_*` environment variables, then defaults).
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Rule file (TOML, or JSON / XML when the name ends in .json / .xml)
    #[arg(long)]
    pub rules: Option<String>,
    /// RNG seed for reproducible opponent choices
    #[arg(long)]
    pub seed: Option<u64>,
    /// Computer strategy
    #[arg(long, value_enum)]
    pub opponent: Option<Strategy>,
    /// Number of recent player moves the adaptive opponent consults
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub window: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactive rounds against the computer
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Pit a uniform random player against the computer for N rounds
    Sim {
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Check that a rule file resolves every pair of moves exactly once
    Verify {
        #[arg(long)]
        rules: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Computer strategy selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Counter the player's most frequent recent move
    Adaptive,
    /// Uniform random moves
    Random,
}

impl Strategy {
    /// Returns the kind string understood by `rpsls_ai::create_opponent`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rpsls_cli::Strategy;
    /// assert_eq!(Strategy::Adaptive.as_str(), "adaptive");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Adaptive => "adaptive",
            Strategy::Random => "random",
        }
    }
}
