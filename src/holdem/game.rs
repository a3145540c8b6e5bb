use std::fmt;

use tracing::debug;

use crate::core::{Card, Classify, Deck, Distribution, OddsError};
use crate::holdem::enumerate::completion_distribution;
use crate::holdem::preflop;
use crate::holdem::{Pocket, Table};

/// The betting stage, derived from how much of the table is showing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PreFlop => "pre-flop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        };
        write!(f, "{}", name)
    }
}

/// The result of evaluating one stage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageReport {
    /// The player's final-hand category distribution.
    pub my_probs: Distribution,
    /// A representative opponent's category distribution.
    pub opponent_probs: Distribution,
    /// Probability the player's category beats the opponent's, ties
    /// split.
    pub win_prob: f64,
}

/// The per-session stage controller.
///
/// Owns the pocket, the table and the deck, keeping the invariant
/// `deck = 52 cards − pocket − table` across every reveal. Stage
/// evaluation dispatches to the closed-form pre-flop model or the
/// enumeration engine and combines both distributions into a single win
/// probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pocket: Pocket,
    table: Table,
    deck: Deck,
    opponents: usize,
}

impl Game {
    /// Start a session before the flop.
    pub fn new(pocket: Pocket, opponents: usize) -> Result<Self, OddsError> {
        Game::with_table(pocket, Table::new(), opponents)
    }

    /// Start a session with community cards already showing.
    ///
    /// # Errors
    ///
    /// `DuplicateCard` if any card appears twice across the pocket and
    /// the table.
    pub fn with_table(pocket: Pocket, table: Table, opponents: usize) -> Result<Self, OddsError> {
        let deck = sync_deck(&pocket, &table)?;
        Ok(Game {
            pocket,
            table,
            deck,
            opponents,
        })
    }

    /// The player's pocket.
    pub fn pocket(&self) -> &Pocket {
        &self.pocket
    }

    /// The community cards.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The cards nobody has seen yet.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The assumed number of opponents. A label only: post-flop opponent
    /// distributions always model a single representative opponent drawn
    /// from the shared deck.
    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        if self.table.river().is_some() {
            Stage::River
        } else if self.table.turn().is_some() {
            Stage::Turn
        } else if self.table.flop().is_some() {
            Stage::Flop
        } else {
            Stage::PreFlop
        }
    }

    /// Reveal the flop.
    pub fn open_flop(&mut self, flop: [Card; 3]) -> Result<(), OddsError> {
        let deck = self.claim(&flop)?;
        self.table.add_flop(flop)?;
        self.deck = deck;
        Ok(())
    }

    /// Reveal the turn.
    pub fn open_turn(&mut self, card: Card) -> Result<(), OddsError> {
        let deck = self.claim(&[card])?;
        self.table.add_turn(card)?;
        self.deck = deck;
        Ok(())
    }

    /// Reveal the river.
    pub fn open_river(&mut self, card: Card) -> Result<(), OddsError> {
        let deck = self.claim(&[card])?;
        self.table.add_river(card)?;
        self.deck = deck;
        Ok(())
    }

    /// Check the new cards against the deck without touching session
    /// state; the shrunk deck is committed only after the table accepts
    /// the reveal.
    fn claim(&self, cards: &[Card]) -> Result<Deck, OddsError> {
        let mut deck = self.deck;
        for &card in cards {
            deck.remove(card)
                .map_err(|_| OddsError::DuplicateCard(card))?;
        }
        Ok(deck)
    }

    /// Evaluate the current stage.
    ///
    /// ```
    /// use holdem_odds::core::Card;
    /// use holdem_odds::holdem::{Game, Pocket, Stage};
    ///
    /// # fn main() -> Result<(), holdem_odds::core::OddsError> {
    /// let pocket = Pocket::new(Card::try_from_raw(13, 0)?, Card::try_from_raw(13, 3)?)?;
    /// let mut game = Game::new(pocket, 3)?;
    /// game.open_flop([
    ///     Card::try_from_raw(14, 0)?,
    ///     Card::try_from_raw(12, 0)?,
    ///     Card::try_from_raw(11, 0)?,
    /// ])?;
    /// assert_eq!(Stage::Flop, game.stage());
    /// let report = game.evaluate();
    /// assert!(report.win_prob >= 0.0 && report.win_prob <= 1.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self) -> StageReport {
        let stage = self.stage();
        debug!(%stage, deck = self.deck.len(), "evaluating stage");
        let known = self.pocket.as_bit_set() | self.table.as_bit_set();
        let board = self.table.as_bit_set();
        let (my_probs, opponent_probs) = match stage {
            Stage::PreFlop => (preflop::distribution(&self.pocket), preflop::OPPONENT_BASELINE),
            Stage::Flop => (
                // Mine: draw the turn and river. Opponent: draw two hole
                // cards plus the turn and river, seeing only the flop.
                completion_distribution(&self.deck, 2, known),
                completion_distribution(&self.deck, 4, board),
            ),
            Stage::Turn => (
                completion_distribution(&self.deck, 1, known),
                completion_distribution(&self.deck, 3, board),
            ),
            Stage::River => (
                // The player's hand is fully determined; only the
                // opponent's two hole cards remain unknown.
                Distribution::point(known.category()),
                completion_distribution(&self.deck, 2, board),
            ),
        };
        let win_prob = my_probs.win_probability(&opponent_probs);
        StageReport {
            my_probs,
            opponent_probs,
            win_prob,
        }
    }
}

/// Deck = the 52 cards minus everything dealt to the pocket or table. A
/// card dealt twice surfaces here as `DuplicateCard`.
fn sync_deck(pocket: &Pocket, table: &Table) -> Result<Deck, OddsError> {
    let mut deck = Deck::new();
    for card in pocket.cards().into_iter().chain(table.revealed()) {
        deck.remove(card)
            .map_err(|_| OddsError::DuplicateCard(card))?;
    }
    Ok(deck)
}
