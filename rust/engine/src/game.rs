use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// How a finished set resolved. `Winner` carries the seat index.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum SetOutcome {
    Winner(usize),
    Draw,
}

/// What happened on a single turn, for narration and logs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Seat that acted (0 or 1)
    pub seat: usize,
    /// Neutral card drawn, None for a standing player's no-op turn
    pub drew: Option<Card>,
    /// Hand card played, if any
    pub played: Option<Card>,
    /// The seat's score after the turn
    pub score: i32,
    /// Whether the seat stands after the turn
    pub stands: bool,
}

/// Set-winner determination, in priority order: a bust loses outright,
/// then the higher score wins, equal scores draw.
///
/// Returns the winning seat, or `None` on a draw.
///
/// # Examples
///
/// ```
/// use pazaak_engine::game::set_winner;
///
/// assert_eq!(set_winner(22, 18, 20), Some(1));
/// assert_eq!(set_winner(18, 22, 20), Some(0));
/// assert_eq!(set_winner(17, 19, 20), Some(1));
/// assert_eq!(set_winner(19, 19, 20), None);
/// ```
pub fn set_winner(score_a: i32, score_b: i32, goal: i32) -> Option<usize> {
    if score_a > goal {
        Some(1)
    } else if score_b > goal {
        Some(0)
    } else if score_b > score_a {
        Some(1)
    } else if score_a > score_b {
        Some(0)
    } else {
        None
    }
}
