//! Command-line argument definitions for the `pazaak` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pazaak", version, about = "Pazaak match engine CLI")]
pub struct PazaakCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a match against the computer, or watch two strategies play
    Play {
        /// Who controls the first seat
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        /// RNG seed for a reproducible match
        #[arg(long)]
        seed: Option<u64>,
        /// Quick match: first set wins the game
        #[arg(long)]
        quick: bool,
        /// Opponent strategy kind
        #[arg(long, default_value = "heuristic")]
        opponent: String,
        /// Scoring-model file for the lookahead strategy
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Simulate recorded sets and write a labeled JSONL dataset
    Sim {
        /// Number of sets to simulate
        #[arg(long, default_value_t = 100)]
        sets: u32,
        /// Output JSONL file
        #[arg(long)]
        output: PathBuf,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Recorded strategy kind (defaults to the heuristic/random mix)
        #[arg(long)]
        strategy: Option<String>,
        /// Scoring-model file for the lookahead strategy
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Pit two strategies against each other over many games
    Eval {
        /// First seat's strategy kind
        #[arg(long = "strategy-a")]
        strategy_a: String,
        /// Second seat's strategy kind
        #[arg(long = "strategy-b")]
        strategy_b: String,
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u32,
        /// RNG seed for a reproducible comparison
        #[arg(long)]
        seed: Option<u64>,
        /// Scoring-model file for the lookahead strategy
        #[arg(long)]
        model: Option<PathBuf>,
        /// Quick matches: one set per game
        #[arg(long)]
        quick: bool,
    },
    /// Deal a sample hand for inspection
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display resolved configuration settings
    Cfg,
    /// Verify RNG determinism
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Vs {
    /// The first seat is controlled interactively
    Human,
    /// The first seat is an automated strategy too
    Ai,
}
