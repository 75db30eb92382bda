//! Dataset generation: play recorded sets and write labeled decision
//! records as JSONL.
//!
//! The recorded seat ("trainee") defaults to the heuristic/random mix so
//! the dataset is not a single deterministic trajectory. After each set
//! the set's records are labeled from the outcome: a won set labels the
//! final decision 1.0 and the earlier ones 0.5, a lost set -1.0 and
//! -0.5, and a drawn set labels everything 0.0.

use std::io::Write;
use std::path::Path;

use pazaak_ai::create_strategy;
use pazaak_engine::{DecisionLogger, DecisionRecord, Engine, MemorySink, Player, SetOutcome};

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;

pub fn handle_sim_command(
    sets: u32,
    output: &Path,
    seed: Option<u64>,
    strategy: Option<&str>,
    model: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if sets == 0 {
        return Err(CliError::InvalidInput("sets must be >= 1".into()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let rules = cfg.to_rules();
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let kind = strategy.unwrap_or("mixed");

    ensure_parent_dir(output).map_err(CliError::Config)?;
    let mut logger = DecisionLogger::create(output)?;
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut draws = 0u32;
    let mut total_records = 0usize;

    for i in 0..sets {
        let set_seed = base_seed.wrapping_add(u64::from(i));
        let sink = MemorySink::new();
        let trainee = create_strategy(kind, set_seed, &rules, model)?;
        let rival = create_strategy("heuristic", set_seed.wrapping_add(1), &rules, model)?;
        let players = [
            Player::new(kind, trainee).with_recorder(Box::new(sink.clone())),
            Player::new("heuristic", rival),
        ];
        let mut engine = Engine::new(Some(set_seed), rules, players)?;
        engine.setup_game();
        let outcome = engine.play_set();
        match outcome {
            SetOutcome::Winner(0) => wins += 1,
            SetOutcome::Winner(_) => losses += 1,
            SetOutcome::Draw => draws += 1,
        }
        let mut records = sink.take();
        label_records(&mut records, outcome);
        for record in &records {
            logger.write(record)?;
        }
        total_records += records.len();
    }

    writeln!(
        out,
        "Simulated {} sets -> {} ({} records)",
        sets,
        output.display(),
        total_records
    )?;
    writeln!(
        out,
        "Trainee ({}): {} wins, {} losses, {} draws",
        kind, wins, losses, draws
    )?;
    Ok(())
}

fn label_records(records: &mut [DecisionRecord], outcome: SetOutcome) {
    let last = records.len().saturating_sub(1);
    for (i, record) in records.iter_mut().enumerate() {
        record.score = Some(match outcome {
            SetOutcome::Winner(0) => {
                if i == last {
                    1.0
                } else {
                    0.5
                }
            }
            SetOutcome::Winner(_) => {
                if i == last {
                    -1.0
                } else {
                    -0.5
                }
            }
            SetOutcome::Draw => 0.0,
        });
    }
}
