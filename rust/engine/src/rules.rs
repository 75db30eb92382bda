use serde::{Deserialize, Serialize};

use crate::cards::SIDE_DECK_SIZE;
use crate::errors::GameError;

/// Configurable game constants.
///
/// Defaults match the classic rules: play to 20, the computer opponent
/// draws to 16 and stands on 17, three sets win the game, four cards per
/// hand.
///
/// # Examples
///
/// ```
/// use pazaak_engine::rules::Rules;
///
/// let rules = Rules::default();
/// assert_eq!(rules.goal, 20);
/// assert_eq!(Rules::quick_match().winning_sets, 1);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Target score; exceeding it busts.
    pub goal: i32,
    /// Heuristic strategy stands on any score above this.
    pub stand_threshold: i32,
    /// Sets needed to win the game.
    pub winning_sets: u32,
    /// Cards dealt from the side deck at the start of each set.
    pub hand_size: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            goal: 20,
            stand_threshold: 16,
            winning_sets: 3,
            hand_size: 4,
        }
    }
}

impl Rules {
    /// First player to take a single set wins the game.
    pub fn quick_match() -> Self {
        Self {
            winning_sets: 1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.hand_size == 0 || self.hand_size > SIDE_DECK_SIZE {
            return Err(GameError::ImpossibleDeal {
                hand_size: self.hand_size,
                deck_size: SIDE_DECK_SIZE,
            });
        }
        if self.winning_sets == 0 {
            return Err(GameError::InvalidRules("winning_sets must be >= 1".into()));
        }
        if self.goal <= 0 {
            return Err(GameError::InvalidRules("goal must be positive".into()));
        }
        Ok(())
    }
}
