use thiserror::Error;

use crate::core::card::Card;

/// Everything that can go wrong handing cards to the estimator.
///
/// All variants are detected at the point of invalid input; nothing is
/// retried and there are no partial results.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OddsError {
    #[error("Card value {0} is out of range (expected 2..=14)")]
    InvalidValue(u8),

    #[error("Card suit {0} is out of range (expected 0..=3)")]
    InvalidSuit(u8),

    #[error("A table holds at most five community cards, got {0}")]
    TooManyTableCards(usize),

    #[error("A table can't hold a partial flop, got {0} cards")]
    IncompleteFlop(usize),

    #[error("The flop has already been dealt")]
    FlopAlreadyDealt,

    #[error("The turn can't be dealt before the flop")]
    TurnBeforeFlop,

    #[error("The turn has already been dealt")]
    TurnAlreadyDealt,

    #[error("The river can't be dealt before the turn")]
    RiverBeforeTurn,

    #[error("The river has already been dealt")]
    RiverAlreadyDealt,

    #[error("Card {0} was dealt more than once")]
    DuplicateCard(Card),

    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
}
