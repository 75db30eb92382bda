use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot deal {hand_size} cards from a {deck_size}-card side deck")]
    ImpossibleDeal { hand_size: usize, deck_size: usize },
    #[error("invalid rules: {0}")]
    InvalidRules(String),
}
