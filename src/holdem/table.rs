use crate::core::{Card, CardBitSet, OddsError};

/// The five community-card slots, split into three reveal groups: the
/// flop (slots 0-2, filled together), the turn (slot 3) and the river
/// (slot 4).
///
/// Revelation is monotonic and ordered: a filled slot is never cleared,
/// and the groups can only be dealt flop, then turn, then river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Table {
    cards: [Option<Card>; 5],
}

impl Table {
    /// An empty table, before the flop.
    pub fn new() -> Self {
        Table::default()
    }

    /// Build a table from cards that are already revealed, in reveal
    /// order.
    ///
    /// # Errors
    ///
    /// `TooManyTableCards` for more than five cards; `IncompleteFlop` for
    /// one or two cards, since the flop group is dealt atomically.
    pub fn with_cards(cards: &[Card]) -> Result<Self, OddsError> {
        if cards.len() > 5 {
            return Err(OddsError::TooManyTableCards(cards.len()));
        }
        if cards.len() == 1 || cards.len() == 2 {
            return Err(OddsError::IncompleteFlop(cards.len()));
        }
        let mut slots = [None; 5];
        for (slot, &card) in slots.iter_mut().zip(cards) {
            *slot = Some(card);
        }
        Ok(Table { cards: slots })
    }

    /// Deal the three flop cards.
    pub fn add_flop(&mut self, flop: [Card; 3]) -> Result<(), OddsError> {
        if self.cards[0].is_some() {
            return Err(OddsError::FlopAlreadyDealt);
        }
        for (slot, card) in self.cards.iter_mut().zip(flop) {
            *slot = Some(card);
        }
        Ok(())
    }

    /// Deal the turn card.
    pub fn add_turn(&mut self, card: Card) -> Result<(), OddsError> {
        if self.cards[2].is_none() {
            return Err(OddsError::TurnBeforeFlop);
        }
        if self.cards[3].is_some() {
            return Err(OddsError::TurnAlreadyDealt);
        }
        self.cards[3] = Some(card);
        Ok(())
    }

    /// Deal the river card.
    pub fn add_river(&mut self, card: Card) -> Result<(), OddsError> {
        if self.cards[3].is_none() {
            return Err(OddsError::RiverBeforeTurn);
        }
        if self.cards[4].is_some() {
            return Err(OddsError::RiverAlreadyDealt);
        }
        self.cards[4] = Some(card);
        Ok(())
    }

    /// The flop group, if dealt.
    pub fn flop(&self) -> Option<[Card; 3]> {
        match (self.cards[0], self.cards[1], self.cards[2]) {
            (Some(a), Some(b), Some(c)) => Some([a, b, c]),
            _ => None,
        }
    }

    /// The turn card, if dealt.
    pub fn turn(&self) -> Option<Card> {
        self.cards[3]
    }

    /// The river card, if dealt.
    pub fn river(&self) -> Option<Card> {
        self.cards[4]
    }

    /// Iterate the revealed cards in reveal order.
    pub fn revealed(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().flatten().copied()
    }

    /// How many community cards are showing.
    pub fn revealed_count(&self) -> usize {
        self.cards.iter().flatten().count()
    }

    /// The revealed cards as a bit set.
    pub fn as_bit_set(&self) -> CardBitSet {
        self.revealed().collect()
    }
}
