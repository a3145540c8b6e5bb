/// Module for the `Card`, `Value` and `Suit` value types.
mod card;
pub use self::card::{Card, Suit, Value};

/// Module for the 52-bit card set.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Module with the lazy k-card combination iterator.
mod combinations;
pub use self::combinations::CardCombinations;

/// Module for the remaining-card deck.
mod deck;
pub use self::deck::Deck;

/// Module for hand categories and classification.
mod category;
pub use self::category::{Category, Classify};

/// Module for category probability distributions.
mod distribution;
pub use self::distribution::Distribution;

/// Module with the crate error type.
mod errors;
pub use self::errors::OddsError;
