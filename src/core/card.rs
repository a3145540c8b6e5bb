use std::fmt;

use crate::core::errors::OddsError;

/// Card rank, two through ace.
///
/// The discriminant runs from 0 (`Two`) to 12 (`Ace`). The raw wire form
/// used at the crate boundary runs from 2 to 14, with 14 for the ace so
/// that it naturally sorts above the king; for straight detection the ace
/// also plays below the two.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// All values, in ascending order.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Parse a raw value in `2..=14` (14 = ace).
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!(Value::from_raw(14), Ok(Value::Ace));
    /// assert!(Value::from_raw(1).is_err());
    /// ```
    pub fn from_raw(value: u8) -> Result<Self, OddsError> {
        match value {
            2..=14 => Ok(VALUES[(value - 2) as usize]),
            _ => Err(OddsError::InvalidValue(value)),
        }
    }

    /// The raw form in `2..=14`.
    pub fn to_raw(self) -> u8 {
        self as u8 + 2
    }

    /// Internal index lookup. Callers guarantee `index < 13`.
    pub(crate) fn from_index(index: usize) -> Self {
        VALUES[index]
    }

    /// Rank adjacency with wrap-around: the ace is adjacent to both the
    /// king and the two.
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert!(Value::Ace.is_adjacent(Value::King));
    /// assert!(Value::Ace.is_adjacent(Value::Two));
    /// assert!(!Value::Ace.is_adjacent(Value::Three));
    /// ```
    pub fn is_adjacent(self, other: Value) -> bool {
        (self as i8 - other as i8).abs() == 1
            || matches!(
                (self, other),
                (Value::Ace, Value::Two) | (Value::Two, Value::Ace)
            )
    }

    /// One-character notation.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = OddsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Value::from_raw(value)
    }
}

/// The four suits. Suit never affects hand strength; it only matters for
/// flush detection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// s
    Spade = 0,
    /// c
    Club = 1,
    /// h
    Heart = 2,
    /// d
    Diamond = 3,
}

/// All suits.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Parse a raw suit in `0..=3`.
    pub fn from_raw(suit: u8) -> Result<Self, OddsError> {
        match suit {
            0..=3 => Ok(SUITS[suit as usize]),
            _ => Err(OddsError::InvalidSuit(suit)),
        }
    }

    /// The raw form in `0..=3`.
    pub fn to_raw(self) -> u8 {
        self as u8
    }

    /// Internal index lookup. Callers guarantee `index < 4`.
    pub(crate) fn from_index(index: usize) -> Self {
        SUITS[index]
    }

    /// One-character notation.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = OddsError;

    fn try_from(suit: u8) -> Result<Self, Self::Error> {
        Suit::from_raw(suit)
    }
}

/// An immutable playing card. Equality, ordering and hashing are all over
/// `(value, suit)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The rank of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a card from already-validated parts.
    pub fn new(value: Value, suit: Suit) -> Self {
        Card { value, suit }
    }

    /// Create a card from the raw boundary form: value in `2..=14`, suit
    /// in `0..=3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_from_raw(11, 0).unwrap();
    /// assert_eq!(card, Card::new(Value::Jack, Suit::Spade));
    /// assert!(Card::try_from_raw(15, 0).is_err());
    /// assert!(Card::try_from_raw(11, 4).is_err());
    /// ```
    pub fn try_from_raw(value: u8, suit: u8) -> Result<Self, OddsError> {
        Ok(Card {
            value: Value::from_raw(value)?,
            suit: Suit::from_raw(suit)?,
        })
    }

    /// Do the two cards share a suit?
    pub fn same_suit(self, other: Card) -> bool {
        self.suit == other.suit
    }

    /// Do the two cards share a value?
    pub fn same_value(self, other: Card) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        for raw in 2..=14u8 {
            assert_eq!(Value::from_raw(raw).unwrap().to_raw(), raw);
        }
        for raw in 0..=3u8 {
            assert_eq!(Suit::from_raw(raw).unwrap().to_raw(), raw);
        }
    }

    #[test]
    fn test_raw_rejects_out_of_range() {
        assert_eq!(Value::from_raw(1), Err(OddsError::InvalidValue(1)));
        assert_eq!(Value::from_raw(15), Err(OddsError::InvalidValue(15)));
        assert_eq!(Suit::from_raw(4), Err(OddsError::InvalidSuit(4)));
        assert!(Card::try_from_raw(0, 0).is_err());
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::Ace > Value::King);
        assert!(Value::Two < Value::Three);
        assert!(Value::Ten < Value::Jack);
    }

    #[test]
    fn test_adjacency_wraps_at_ace() {
        assert!(Value::King.is_adjacent(Value::Ace));
        assert!(Value::Two.is_adjacent(Value::Ace));
        assert!(Value::Five.is_adjacent(Value::Six));
        assert!(!Value::Five.is_adjacent(Value::Seven));
        assert!(!Value::King.is_adjacent(Value::Two));
    }

    #[test]
    fn test_same_suit_same_value() {
        let a = Card::new(Value::Ace, Suit::Spade);
        let b = Card::new(Value::Ace, Suit::Diamond);
        let c = Card::new(Value::King, Suit::Spade);
        assert!(a.same_value(b));
        assert!(!a.same_suit(b));
        assert!(a.same_suit(c));
        assert!(!a.same_value(c));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Card::new(Value::Ace, Suit::Spade)),
            "As".to_string()
        );
        assert_eq!(
            format!("{}", Card::new(Value::Ten, Suit::Diamond)),
            "Td".to_string()
        );
    }
}
