use std::ops::RangeInclusive;

/// A pazaak card is just a signed point value. Neutral cards are 1..=10,
/// side-deck cards are -5..=5 excluding 0.
pub type Card = i8;

/// Range of neutral card values drawn automatically each turn.
pub const NEUTRAL_RANGE: RangeInclusive<Card> = 1..=10;

/// Number of cards in a full side deck.
pub const SIDE_DECK_SIZE: usize = 20;

/// Builds the full 20-card side deck: every value in [-5, 5] except 0,
/// each appearing exactly twice.
pub fn side_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(SIDE_DECK_SIZE);
    for value in -5..=5i8 {
        if value == 0 {
            continue;
        }
        deck.push(value);
        deck.push(value);
    }
    deck
}

/// Score of a board: the sum of all card values on it.
///
/// Hand cards can be negative, so a score may be negative too.
///
/// # Examples
///
/// ```
/// use pazaak_engine::cards::score;
///
/// assert_eq!(score(&[7, 9, -2]), 14);
/// assert_eq!(score(&[]), 0);
/// assert_eq!(score(&[-5, 2]), -3);
/// ```
pub fn score(board: &[Card]) -> i32 {
    board.iter().map(|&c| i32::from(c)).sum()
}

/// A player busts when their score strictly exceeds the goal.
pub fn is_bust(score: i32, goal: i32) -> bool {
    score > goal
}
