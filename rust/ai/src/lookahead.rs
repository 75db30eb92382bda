use pazaak_engine::{Card, Decider, Decision};

use crate::model::{Features, ScoreModel};

/// Model-driven strategy: enumerates every candidate action, queries the
/// scoring model for each, and takes the best.
///
/// Enumeration order is load-bearing for the tie-break. Each hand index
/// comes first, then a synthetic "play nothing" option; for each of
/// those, standing is evaluated before not standing. The running best is
/// replaced on `>=`, so the last-visited action wins among ties: "don't
/// stand" beats "stand", and "play nothing" beats playing any card. With
/// an all-ties model the result is a plain pass.
pub struct LookaheadStrategy {
    model: Box<dyn ScoreModel>,
}

impl LookaheadStrategy {
    pub fn new(model: Box<dyn ScoreModel>) -> Self {
        Self { model }
    }
}

impl Decider for LookaheadStrategy {
    fn decide(
        &mut self,
        hand: &[Card],
        self_score: i32,
        opp_score: i32,
        opp_stands: bool,
    ) -> Decision {
        let mut best = f64::NEG_INFINITY;
        let mut choice = Decision::pass();
        let candidates = hand
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::once(None))
            .enumerate();
        for (index, card) in candidates {
            for will_stand in [true, false] {
                let card_value = card.map_or(0, i32::from);
                let features = Features {
                    self_score: f64::from(self_score),
                    opp_stands,
                    will_stand,
                    score_difference: f64::from(self_score - opp_score),
                    score_if_card_played: f64::from(self_score + card_value),
                };
                let predicted = self.model.predict(&features);
                if predicted >= best {
                    best = predicted;
                    choice = Decision {
                        play_card: card.is_some(),
                        card_index: card.is_some().then_some(index),
                        stand: will_stand,
                    };
                }
            }
        }
        choice
    }

    fn name(&self) -> &str {
        "lookahead"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConstantModel;

    /// Scores an action by the score it reaches, minus a penalty for
    /// standing.
    struct ReachModel {
        stand_penalty: f64,
    }

    impl ScoreModel for ReachModel {
        fn predict(&self, features: &Features) -> f64 {
            let penalty = if features.will_stand {
                self.stand_penalty
            } else {
                0.0
            };
            features.score_if_card_played - penalty
        }
    }

    #[test]
    fn all_ties_resolve_to_a_plain_pass() {
        let mut strategy = LookaheadStrategy::new(Box::new(ConstantModel(0.0)));
        let d = strategy.decide(&[6, 3, -2, 5], 14, 15, false);
        assert_eq!(d, Decision::pass());
    }

    #[test]
    fn all_ties_on_an_empty_hand_also_pass() {
        let mut strategy = LookaheadStrategy::new(Box::new(ConstantModel(1.0)));
        assert_eq!(strategy.decide(&[], 10, 10, false), Decision::pass());
    }

    #[test]
    fn picks_the_highest_scoring_card() {
        let mut strategy = LookaheadStrategy::new(Box::new(ReachModel { stand_penalty: 0.5 }));
        let d = strategy.decide(&[2, 5, -1], 10, 10, false);
        assert_eq!(d, Decision::play(1));
    }

    #[test]
    fn ties_between_equal_cards_go_to_the_later_index() {
        let mut strategy = LookaheadStrategy::new(Box::new(ReachModel { stand_penalty: 0.5 }));
        let d = strategy.decide(&[5, 5, 1], 10, 10, false);
        assert_eq!(d, Decision::play(1));
    }

    #[test]
    fn stand_wins_only_when_strictly_better() {
        let mut strategy = LookaheadStrategy::new(Box::new(ReachModel {
            stand_penalty: -0.5,
        }));
        let d = strategy.decide(&[2, 5], 10, 10, false);
        assert_eq!(d, Decision::play_and_stand(1));
    }

    #[test]
    fn model_is_queried_once_per_candidate_action() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counting(Rc<Cell<usize>>);

        impl ScoreModel for Counting {
            fn predict(&self, _: &Features) -> f64 {
                self.0.set(self.0.get() + 1);
                0.0
            }
        }

        let calls = Rc::new(Cell::new(0));
        let mut strategy = LookaheadStrategy::new(Box::new(Counting(calls.clone())));
        strategy.decide(&[1, 2, 3, 4], 10, 10, false);
        // (4 cards + play-nothing) x stand/no-stand
        assert_eq!(calls.get(), 10);
    }
}
