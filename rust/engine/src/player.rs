use std::fmt;

use crate::cards::{is_bust, score, Card};
use crate::deck::Dealer;
use crate::logger::{DecisionRecord, DecisionSink};

/// The atomic output of a strategy call.
///
/// `card_index` is meaningful only when `play_card` is true; a stale or
/// out-of-bounds index is tolerated downstream (the play is silently
/// skipped).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Decision {
    pub play_card: bool,
    pub card_index: Option<usize>,
    pub stand: bool,
}

impl Decision {
    /// Neither play nor stand.
    pub fn pass() -> Self {
        Self {
            play_card: false,
            card_index: None,
            stand: false,
        }
    }

    pub fn stand() -> Self {
        Self {
            play_card: false,
            card_index: None,
            stand: true,
        }
    }

    pub fn play(index: usize) -> Self {
        Self {
            play_card: true,
            card_index: Some(index),
            stand: false,
        }
    }

    pub fn play_and_stand(index: usize) -> Self {
        Self {
            play_card: true,
            card_index: Some(index),
            stand: true,
        }
    }
}

/// Decision seam between the engine and a strategy or human front end.
///
/// `&mut self` lets randomized strategies own their seeded RNG.
pub trait Decider {
    fn decide(
        &mut self,
        hand: &[Card],
        self_score: i32,
        opp_score: i32,
        opp_stands: bool,
    ) -> Decision;

    fn name(&self) -> &str;
}

/// One seat at the table: hand, board, stand flag, set counter, and the
/// bound decision logic.
pub struct Player {
    name: String,
    hand: Vec<Card>,
    board: Vec<Card>,
    stands: bool,
    sets_won: u32,
    decider: Box<dyn Decider>,
    recorder: Option<Box<dyn DecisionSink>>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("board", &self.board)
            .field("stands", &self.stands)
            .field("sets_won", &self.sets_won)
            .finish_non_exhaustive()
    }
}

impl Player {
    pub fn new(name: impl Into<String>, decider: Box<dyn Decider>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            board: Vec::new(),
            stands: false,
            sets_won: 0,
            decider,
            recorder: None,
        }
    }

    /// Attaches an observer that sees every decision this player makes.
    pub fn with_recorder(mut self, recorder: Box<dyn DecisionSink>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decider_name(&self) -> &str {
        self.decider.name()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn score(&self) -> i32 {
        score(&self.board)
    }

    pub fn stands(&self) -> bool {
        self.stands
    }

    pub fn sets_won(&self) -> u32 {
        self.sets_won
    }

    pub fn stand(&mut self) {
        self.stands = true;
    }

    pub fn win_set(&mut self) {
        self.sets_won += 1;
    }

    /// Replaces the hand with a fresh deal. Called at every set start.
    pub fn draw_hand(&mut self, dealer: &mut Dealer) {
        self.hand = dealer.deal_hand();
    }

    /// Clears the per-set state; `sets_won` survives until a new game.
    pub fn reset_for_set(&mut self) {
        self.board.clear();
        self.hand.clear();
        self.stands = false;
    }

    pub fn reset_for_game(&mut self) {
        self.reset_for_set();
        self.sets_won = 0;
    }

    /// Moves the card at `index` from hand to board. A stale index is a
    /// silent no-op; a strategy must never crash the engine.
    pub fn play_card_at(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.board.push(card);
        Some(card)
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Vec<Card>) {
        self.board = board;
    }

    /// One turn for this player against the given opponent state.
    ///
    /// Standing players do nothing. Otherwise: neutral draw, strategy
    /// decision on the post-draw score, recorder emission, card play,
    /// then the bust check which forces the stand flag. The decided card
    /// play is applied even when the neutral draw already busted the
    /// score; the forced stand comes after.
    ///
    /// Returns `(drew, played)` for the caller's narration.
    pub fn take_turn(
        &mut self,
        opp_score: i32,
        opp_stands: bool,
        dealer: &mut Dealer,
        goal: i32,
    ) -> (Option<Card>, Option<Card>) {
        if self.stands {
            return (None, None);
        }

        let drew = dealer.draw_neutral();
        self.board.push(drew);
        let self_score = self.score();

        let decision = self
            .decider
            .decide(&self.hand, self_score, opp_score, opp_stands);

        if let Some(recorder) = &mut self.recorder {
            let card_value = decision
                .card_index
                .filter(|_| decision.play_card)
                .and_then(|i| self.hand.get(i).copied())
                .unwrap_or(0);
            recorder.record(&DecisionRecord {
                hand: self.hand.clone(),
                self_score,
                opp_score,
                opp_stands,
                play_card: decision.play_card,
                card_value,
                stand: decision.stand,
                score: None,
                ts: None,
            });
        }

        let mut played = None;
        if decision.play_card {
            if let Some(index) = decision.card_index {
                played = self.play_card_at(index);
            }
        }

        if is_bust(self.score(), goal) {
            self.stands = true;
        } else if decision.stand {
            self.stands = true;
        }

        (Some(drew), played)
    }
}
