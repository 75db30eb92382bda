use pazaak_engine::{Card, Decider, Decision};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Noise-mixing wrapper: defers to the primary strategy, but with
/// probability `epsilon` asks the fallback instead. Used to diversify
/// recorded decisions when generating training data.
pub struct MixedStrategy {
    primary: Box<dyn Decider>,
    fallback: Box<dyn Decider>,
    epsilon: f64,
    rng: ChaCha20Rng,
}

impl MixedStrategy {
    pub fn new(
        primary: Box<dyn Decider>,
        fallback: Box<dyn Decider>,
        epsilon: f64,
        seed: u64,
    ) -> Self {
        Self {
            primary,
            fallback,
            epsilon: epsilon.clamp(0.0, 1.0),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Decider for MixedStrategy {
    fn decide(
        &mut self,
        hand: &[Card],
        self_score: i32,
        opp_score: i32,
        opp_stands: bool,
    ) -> Decision {
        if self.rng.random_bool(self.epsilon) {
            self.fallback.decide(hand, self_score, opp_score, opp_stands)
        } else {
            self.primary.decide(hand, self_score, opp_score, opp_stands)
        }
    }

    fn name(&self) -> &str {
        "mixed"
    }
}
