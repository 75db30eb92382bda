use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::StrategyError;

/// Inputs to one scoring-model query: the decision context plus the
/// candidate action being evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub self_score: f64,
    pub opp_stands: bool,
    pub will_stand: bool,
    pub score_difference: f64,
    pub score_if_card_played: f64,
}

impl Features {
    /// Column order matches the recorded training data.
    pub fn to_vector(&self) -> [f64; 5] {
        [
            self.self_score,
            f64::from(u8::from(self.opp_stands)),
            f64::from(u8::from(self.will_stand)),
            self.score_difference,
            self.score_if_card_played,
        ]
    }
}

/// External predictive model queried by the lookahead strategy. Pure and
/// synchronous; a higher value means a better expected outcome.
pub trait ScoreModel {
    fn predict(&self, features: &Features) -> f64;
}

/// Fixed-value model for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct ConstantModel(pub f64);

impl ScoreModel for ConstantModel {
    fn predict(&self, _: &Features) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Regression tree loaded from JSON: a flat node array rooted at index
/// 0, split on `feature <= threshold` (left on true).
///
/// Validation at load time requires every split's children to point
/// forward in the array, so a prediction walk always terminates.
#[derive(Debug, Clone)]
pub struct TreeModel {
    nodes: Vec<Node>,
}

impl TreeModel {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StrategyError> {
        let file = File::open(&path).map_err(|e| {
            StrategyError::ModelUnavailable(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StrategyError> {
        let nodes: Vec<Node> = serde_json::from_reader(reader)
            .map_err(|e| StrategyError::ModelUnavailable(format!("bad model file: {}", e)))?;
        let model = Self { nodes };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), StrategyError> {
        if self.nodes.is_empty() {
            return Err(StrategyError::ModelUnavailable("empty model".into()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= 5 {
                    return Err(StrategyError::ModelUnavailable(format!(
                        "node {}: feature index {} out of range",
                        i, feature
                    )));
                }
                for child in [*left, *right] {
                    if child <= i || child >= self.nodes.len() {
                        return Err(StrategyError::ModelUnavailable(format!(
                            "node {}: child index {} out of range",
                            i, child
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl ScoreModel for TreeModel {
    fn predict(&self, features: &Features) -> f64 {
        let vector = features.to_vector();
        let mut at = 0;
        loop {
            match &self.nodes[at] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    at = if vector[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn features(self_score: f64, will_stand: bool) -> Features {
        Features {
            self_score,
            opp_stands: false,
            will_stand,
            score_difference: 0.0,
            score_if_card_played: self_score,
        }
    }

    #[test]
    fn single_leaf_model_is_constant() {
        let model = TreeModel::from_reader(r#"[{"value": 0.5}]"#.as_bytes()).unwrap();
        assert_eq!(model.predict(&features(3.0, false)), 0.5);
        assert_eq!(model.predict(&features(19.0, true)), 0.5);
    }

    #[test]
    fn splits_route_on_the_named_feature() {
        let json = r#"[
            {"feature": 0, "threshold": 16.0, "left": 1, "right": 2},
            {"value": -1.0},
            {"value": 1.0}
        ]"#;
        let model = TreeModel::from_reader(json.as_bytes()).unwrap();
        assert_eq!(model.predict(&features(16.0, false)), -1.0);
        assert_eq!(model.predict(&features(17.0, false)), 1.0);
    }

    #[test]
    fn boolean_features_are_zero_or_one() {
        let json = r#"[
            {"feature": 2, "threshold": 0.5, "left": 1, "right": 2},
            {"value": 0.0},
            {"value": 1.0}
        ]"#;
        let model = TreeModel::from_reader(json.as_bytes()).unwrap();
        assert_eq!(model.predict(&features(10.0, false)), 0.0);
        assert_eq!(model.predict(&features(10.0, true)), 1.0);
    }

    #[test]
    fn backward_child_references_are_rejected() {
        let json = r#"[
            {"feature": 0, "threshold": 16.0, "left": 0, "right": 1},
            {"value": 1.0}
        ]"#;
        assert!(matches!(
            TreeModel::from_reader(json.as_bytes()),
            Err(StrategyError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn out_of_range_feature_is_rejected() {
        let json = r#"[
            {"feature": 7, "threshold": 1.0, "left": 1, "right": 2},
            {"value": 0.0},
            {"value": 1.0}
        ]"#;
        assert!(matches!(
            TreeModel::from_reader(json.as_bytes()),
            Err(StrategyError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn empty_model_is_rejected() {
        assert!(matches!(
            TreeModel::from_reader("[]".as_bytes()),
            Err(StrategyError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn missing_file_is_a_construction_error() {
        assert!(matches!(
            TreeModel::from_path("/nonexistent/model.json"),
            Err(StrategyError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(br#"[{"value": 0.25}]"#).unwrap();
        drop(f);
        let model = TreeModel::from_path(&path).unwrap();
        assert_eq!(model.predict(&features(0.0, false)), 0.25);
    }
}
