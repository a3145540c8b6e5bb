use crate::core::{Card, CardBitSet, OddsError};

/// The two private hole cards owned by one player for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pocket {
    first: Card,
    second: Card,
}

impl Pocket {
    /// Create a pocket from two distinct cards.
    ///
    /// # Errors
    ///
    /// `DuplicateCard` if both slots would hold the same card.
    pub fn new(first: Card, second: Card) -> Result<Self, OddsError> {
        if first == second {
            return Err(OddsError::DuplicateCard(second));
        }
        Ok(Pocket { first, second })
    }

    /// Both cards, in the order they were given.
    pub fn cards(&self) -> [Card; 2] {
        [self.first, self.second]
    }

    /// Is this a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.first.same_value(self.second)
    }

    /// Do both cards share a suit?
    pub fn is_suited(&self) -> bool {
        self.first.same_suit(self.second)
    }

    /// Are the two ranks adjacent? The ace connects to both the king and
    /// the two.
    pub fn is_connected(&self) -> bool {
        self.first.value.is_adjacent(self.second.value)
    }

    /// The pocket as a bit set.
    pub fn as_bit_set(&self) -> CardBitSet {
        self.cards().into_iter().collect()
    }

    /// Straight geometry for the pre-flop tables: the rank gap between
    /// the two cards and the low anchor rank, both in raw 2..=14 form.
    ///
    /// An ace plays low against a 2 through 7 (gap counted through the
    /// wheel, anchor 14) and high against an 8 or better (anchor at the
    /// other card). Only meaningful for unpaired pockets.
    pub(crate) fn connector_shape(&self) -> (u8, u8) {
        let a = self.first.value.to_raw();
        let b = self.second.value.to_raw();
        if a != 14 && b != 14 {
            (a.abs_diff(b), a.min(b))
        } else {
            let other = if a == 14 { b } else { a };
            if other < 8 {
                (other - 1, 14)
            } else {
                (14 - other, other)
            }
        }
    }
}
