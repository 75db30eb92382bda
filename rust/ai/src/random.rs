use pazaak_engine::{Card, Decider, Decision};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Coin-flip strategy: uniformly decides whether to play (a uniform hand
/// index when the hand is non-empty) and, independently, whether to
/// stand. Ignores all scores. Used for noise injection, never as the
/// primary opponent.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: ChaCha20Rng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Decider for RandomStrategy {
    fn decide(&mut self, hand: &[Card], _: i32, _: i32, _: bool) -> Decision {
        let wants_play = self.rng.random_bool(0.5);
        let card_index = if wants_play && !hand.is_empty() {
            Some(self.rng.random_range(0..hand.len()))
        } else {
            None
        };
        let stand = self.rng.random_bool(0.5);
        Decision {
            play_card: card_index.is_some(),
            card_index,
            stand,
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
