//! Core pazaak match engine: cards and scoring, seeded dealing, the
//! player data model and decision seam, the turn/set/game state machine,
//! and the decision recorder hook.
//!
//! Strategies live in the `pazaak_ai` crate; this crate only defines the
//! [`Decider`] trait they implement.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;

pub use cards::{is_bust, score, side_deck, Card, NEUTRAL_RANGE, SIDE_DECK_SIZE};
pub use deck::Dealer;
pub use engine::Engine;
pub use errors::GameError;
pub use game::{set_winner, SetOutcome, TurnReport};
pub use logger::{DecisionLogger, DecisionRecord, DecisionSink, MemorySink};
pub use player::{Decider, Decision, Player};
pub use rules::Rules;
