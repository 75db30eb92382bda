//! # Pazaak CLI Library
//!
//! Command-line interface for the pazaak match engine. The primary entry
//! point is [`run`], which parses arguments and dispatches to a
//! subcommand handler with injected output streams.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pazaak", "deal", "--seed", "42"];
//! let code = pazaak_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a match against the computer, or watch two strategies
//! - `sim`: Simulate recorded sets and write a labeled JSONL dataset
//! - `eval`: Compare two strategies head-to-head over many games
//! - `deal`: Deal a sample hand for inspection
//! - `cfg`: Display resolved configuration settings
//! - `rng`: Verify RNG determinism

use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod human;
pub mod io_utils;
pub mod ui;

use cli::{Commands, PazaakCli};
use clap::Parser;

use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_rng_command, handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// Returns the process exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "eval", "deal", "cfg", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PazaakCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: pazaak <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: pazaak --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                vs,
                seed,
                quick,
                opponent,
                model,
            } => {
                // Real stdin/stdout for interactive prompts; narration
                // still goes to the injected stream.
                let input = Box::new(std::io::stdin().lock());
                let prompt = Box::new(std::io::stdout());
                match handle_play_command(
                    vs,
                    seed,
                    quick,
                    &opponent,
                    model.as_deref(),
                    input,
                    prompt,
                    out,
                ) {
                    Ok(()) => 0,
                    Err(e) => {
                        if ui::write_error(err, &e.to_string()).is_err() {
                            return 2;
                        }
                        2
                    }
                }
            }
            Commands::Sim {
                sets,
                output,
                seed,
                strategy,
                model,
            } => match handle_sim_command(
                sets,
                &output,
                seed,
                strategy.as_deref(),
                model.as_deref(),
                out,
            ) {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Eval {
                strategy_a,
                strategy_b,
                games,
                seed,
                model,
                quick,
            } => match handle_eval_command(
                &strategy_a,
                &strategy_b,
                games,
                seed,
                model.as_deref(),
                quick,
                out,
            ) {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Deal { seed } => match handle_deal_command(seed, out) {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Cfg => match handle_cfg_command(out) {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            },
        },
    }
}
