//! Strategy implementations for the pazaak engine.
//!
//! Every strategy implements the engine's [`Decider`] trait. Three kinds
//! ship here:
//!
//! - [`random::RandomStrategy`] - coin-flip noise, never a real opponent
//! - [`heuristic::HeuristicStrategy`] - the deterministic rule cascade
//!   used as the default opponent
//! - [`lookahead::LookaheadStrategy`] - enumerates every candidate
//!   action and asks an external scoring model ([`model::ScoreModel`])
//!   to rank them
//!
//! plus [`mixed::MixedStrategy`], an epsilon-mixing wrapper used when
//! generating training data.
//!
//! ```rust
//! use pazaak_ai::create_strategy;
//! use pazaak_engine::Rules;
//!
//! let mut ai = create_strategy("heuristic", 42, &Rules::default(), None).unwrap();
//! let decision = ai.decide(&[6, 3, -2, 5], 14, 15, false);
//! assert!(decision.play_card);
//! ```

use std::path::Path;

use thiserror::Error;

pub use pazaak_engine::{Decider, Decision};

pub mod heuristic;
pub mod lookahead;
pub mod mixed;
pub mod model;
pub mod random;

use pazaak_engine::Rules;

/// Strategy kinds accepted by [`create_strategy`].
pub const STRATEGY_KINDS: &[&str] = &["random", "heuristic", "lookahead", "mixed"];

/// Fallback share of decisions handed to the random strategy by the
/// `mixed` kind.
pub const MIXED_EPSILON: f64 = 0.05;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("unknown strategy '{0}' (expected one of: random, heuristic, lookahead, mixed)")]
    Unknown(String),
    #[error("scoring model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Builds a strategy by kind name.
///
/// `lookahead` requires a model path; a missing or unloadable model is a
/// construction-time error, never a mid-game one.
pub fn create_strategy(
    kind: &str,
    seed: u64,
    rules: &Rules,
    model_path: Option<&Path>,
) -> Result<Box<dyn Decider>, StrategyError> {
    match kind {
        "random" => Ok(Box::new(random::RandomStrategy::new(seed))),
        "heuristic" => Ok(Box::new(heuristic::HeuristicStrategy::new(rules))),
        "lookahead" => {
            let path = model_path.ok_or_else(|| {
                StrategyError::ModelUnavailable("no model path given".to_string())
            })?;
            let tree = model::TreeModel::from_path(path)?;
            Ok(Box::new(lookahead::LookaheadStrategy::new(Box::new(tree))))
        }
        "mixed" => Ok(Box::new(mixed::MixedStrategy::new(
            Box::new(heuristic::HeuristicStrategy::new(rules)),
            Box::new(random::RandomStrategy::new(seed.wrapping_add(1))),
            MIXED_EPSILON,
            seed,
        ))),
        other => Err(StrategyError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_kind_except_lookahead_constructs() {
        let rules = Rules::default();
        for kind in STRATEGY_KINDS {
            if *kind == "lookahead" {
                continue;
            }
            let ai = create_strategy(kind, 1, &rules, None).unwrap();
            assert_eq!(ai.name(), *kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(matches!(
            create_strategy("bogus", 1, &Rules::default(), None),
            Err(StrategyError::Unknown(_))
        ));
    }

    #[test]
    fn lookahead_without_a_model_fails_at_construction() {
        assert!(matches!(
            create_strategy("lookahead", 1, &Rules::default(), None),
            Err(StrategyError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn lookahead_loads_a_model_file() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(br#"[{"value": 0.0}]"#).unwrap();
        drop(f);
        let mut ai = create_strategy("lookahead", 1, &Rules::default(), Some(&path)).unwrap();
        assert_eq!(ai.name(), "lookahead");
        assert_eq!(ai.decide(&[1, 2], 10, 10, false), Decision::pass());
    }
}
