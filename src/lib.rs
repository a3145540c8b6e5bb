//! `holdem-odds` estimates a Texas Hold'em player's probability of holding
//! the winning hand at each betting stage, given the player's two hole
//! cards, the community cards revealed so far, and an assumed number of
//! opponents.
//!
//! The crate is pure computation. Pre-flop probabilities come from
//! closed-form combinatorial tables over the 2,118,760 possible boards;
//! from the flop on, every remaining-deck completion is enumerated and
//! classified into one of the ten hand categories. Hands are compared by
//! category only; kickers are never consulted, so equal categories split
//! the pot 50/50. Given the same inputs the results are bit-for-bit
//! repeatable.
//!
//! ```
//! use holdem_odds::core::Card;
//! use holdem_odds::holdem::{Game, Pocket};
//!
//! # fn main() -> Result<(), holdem_odds::core::OddsError> {
//! // Pocket aces, evaluated before the flop.
//! let pocket = Pocket::new(Card::try_from_raw(14, 3)?, Card::try_from_raw(14, 0)?)?;
//! let game = Game::new(pocket, 8)?;
//! let report = game.evaluate();
//! assert!(report.win_prob > 0.5);
//! # Ok(())
//! # }
//! ```

/// Card-level value types: cards, decks, hand categories, distributions.
pub mod core;
/// Texas Hold'em specific code: pockets, tables, stage evaluation.
pub mod holdem;
