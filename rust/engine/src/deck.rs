use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{side_deck, Card, NEUTRAL_RANGE};
use crate::errors::GameError;
use crate::rules::Rules;

/// Owns the random source for a match: neutral draws, hand deals, and
/// the opening-seat coin flip all pull from the same seeded stream.
#[derive(Debug)]
pub struct Dealer {
    side_deck: Vec<Card>,
    hand_size: usize,
    rng: ChaCha20Rng,
}

impl Dealer {
    pub fn new(seed: u64, rules: Rules) -> Result<Self, GameError> {
        rules.validate()?;
        Ok(Self {
            side_deck: side_deck(),
            hand_size: rules.hand_size,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    /// Uniform neutral card, drawn onto a board every non-standing turn.
    pub fn draw_neutral(&mut self) -> Card {
        self.rng.random_range(NEUTRAL_RANGE)
    }

    /// Samples `hand_size` distinct positions from the side deck.
    /// Values can still repeat since the deck holds two of each.
    pub fn deal_hand(&mut self) -> Vec<Card> {
        rand::seq::index::sample(&mut self.rng, self.side_deck.len(), self.hand_size)
            .iter()
            .map(|i| self.side_deck[i])
            .collect()
    }

    /// Uniform choice of the opening seat.
    pub fn first_player(&mut self) -> usize {
        self.rng.random_range(0..2)
    }
}
