use crate::core::card_bit_set::CardBitSetIter;
use crate::core::errors::OddsError;
use crate::core::{Card, CardBitSet};

/// The cards not yet dealt to any pocket or table.
///
/// A deck starts with all 52 cards and only ever shrinks. Removal of a
/// card that is not present is an error rather than a no-op: it means the
/// same card was dealt twice somewhere upstream, and that must surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    cards: CardBitSet,
}

impl Default for Deck {
    fn default() -> Self {
        Deck {
            cards: CardBitSet::full(),
        }
    }
}

impl Deck {
    /// A full 52-card deck.
    pub fn new() -> Self {
        Deck::default()
    }

    /// Number of cards still in the deck.
    pub fn len(&self) -> usize {
        self.cards.count() as usize
    }

    /// Is the deck out of cards?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is the card still in the deck?
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(card)
    }

    /// Remove one card.
    ///
    /// # Errors
    ///
    /// `CardNotInDeck` if the card has already been removed.
    pub fn remove(&mut self, card: Card) -> Result<(), OddsError> {
        if !self.cards.contains(card) {
            return Err(OddsError::CardNotInDeck(card));
        }
        self.cards.remove(card);
        Ok(())
    }

    /// Remove every card in the iterator, failing on the first one that is
    /// not present. On error the deck keeps the removals made so far, so
    /// callers that need atomicity should work on a copy.
    pub fn remove_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) -> Result<(), OddsError> {
        for card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Iterate the remaining cards.
    pub fn iter(&self) -> CardBitSetIter {
        self.cards.into_iter()
    }

    /// The remaining cards as an indexable list, for combination
    /// enumeration.
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// The remaining cards as a bit set.
    pub fn as_bit_set(&self) -> CardBitSet {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_new_deck_is_full() {
        let deck = Deck::new();
        assert_eq!(52, deck.len());
        assert!(!deck.is_empty());
        assert!(deck.contains(Card::new(Value::Ace, Suit::Spade)));
    }

    #[test]
    fn test_remove_shrinks() {
        let mut deck = Deck::new();
        let card = Card::new(Value::Seven, Suit::Club);
        deck.remove(card).unwrap();
        assert_eq!(51, deck.len());
        assert!(!deck.contains(card));
    }

    #[test]
    fn test_double_remove_is_an_error() {
        let mut deck = Deck::new();
        let card = Card::new(Value::Seven, Suit::Club);
        deck.remove(card).unwrap();
        assert_eq!(Err(OddsError::CardNotInDeck(card)), deck.remove(card));
    }

    #[test]
    fn test_remove_cards_reports_duplicate_deal() {
        let mut deck = Deck::new();
        let card = Card::new(Value::Queen, Suit::Diamond);
        let result = deck.remove_cards([card, card]);
        assert_eq!(Err(OddsError::CardNotInDeck(card)), result);
    }

    #[test]
    fn test_to_vec_matches_len() {
        let mut deck = Deck::new();
        deck.remove_cards([
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Heart),
        ])
        .unwrap();
        assert_eq!(50, deck.to_vec().len());
    }
}
