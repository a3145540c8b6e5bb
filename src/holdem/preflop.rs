//! Closed-form pre-flop combinatorics.
//!
//! Before the flop there is no need to enumerate the C(50, 5) = 2,118,760
//! possible boards: for each category the number of qualifying boards is a
//! small function of the pocket's pairedness, suitedness, rank gap and low
//! anchor. The tables here reproduce the standard published starting-hand
//! counts, including the multiplicative discounts applied to suited
//! pockets where some same-suit boards would be double counted as flushes.
//!
//! The one category without a closed form is the pair: a paired pocket
//! already is a pair, so [`one_pair_boards`] returns `None` and the
//! distribution assembly zeroes that slot, letting the high-card bucket
//! absorb the residual mass.

use crate::core::{Card, Distribution, Value};
use crate::holdem::pocket::Pocket;

/// Number of distinct five-card boards dealt against a fixed pocket:
/// C(50, 5).
pub const BOARD_COMBINATIONS: u64 = 2_118_760;

/// Category distribution of a generic opponent before the flop,
/// calibrated against eight unseen opponents. It is comparison data, not
/// a computed histogram: it is never recomputed from the actual deal and
/// intentionally does not sum to exactly 1.
pub const OPPONENT_BASELINE: Distribution = Distribution::new([
    1.0 / 30_940.0,
    1.0 / 3_590.0,
    1.0 / 595.0,
    1.0 / 38.0,
    1.0 / 33.0,
    1.0 / 21.0,
    1.0 / 20.0,
    4.0 / 17.0,
    5.0 / 11.0,
    4.0 / 23.0,
]);

/// Boards making a straight around a single held rank, indexed by raw
/// value. Slots 0 and 1 are padding.
const ONE_CARD_STRAIGHT: [u64; 15] = [
    0, 0, 25_000, 33_000, 41_000, 49_000, 48_100, 48_300, 48_300, 48_100, 49_000, 41_000, 33_000,
    25_000, 24_000,
];

fn one_card_straight(raw_value: u8) -> u64 {
    ONE_CARD_STRAIGHT[raw_value as usize]
}

/// Truncating suit discount, matching the reference tables' integer
/// truncation.
fn discount(boards: u64, factor: f64) -> u64 {
    (boards as f64 * factor) as u64
}

fn is_ten_or_better(card: Card) -> bool {
    card.value >= Value::Ten
}

/// Boards completing a royal flush.
pub fn royal_flush_boards(pocket: &Pocket) -> u64 {
    let [a, b] = pocket.cards();
    if is_ten_or_better(a) && is_ten_or_better(b) {
        if pocket.is_suited() {
            1_084
        } else {
            94
        }
    } else if is_ten_or_better(a) || is_ten_or_better(b) {
        49
    } else {
        4
    }
}

/// Boards completing a straight flush (excluding royals).
pub fn straight_flush_boards(pocket: &Pocket) -> u64 {
    if !pocket.is_suited() {
        return 250;
    }
    let (gap, low) = pocket.connector_shape();
    match gap {
        1 => match low {
            4..=9 => 4_200,
            3 | 10 => 3_150,
            2 | 11 => 2_120,
            13 => 78,
            _ => 1_100,
        },
        2 => match low {
            3..=9 => 3_240,
            2 | 10 => 2_170,
            12 => 122,
            _ => 1_100,
        },
        3 => match low {
            2..=9 => 2_210,
            11 => 166,
            _ => 1_150,
        },
        4 => match low {
            10 => 210,
            _ => 1_250,
        },
        _ => 250,
    }
}

/// Boards completing four of a kind.
pub fn four_of_a_kind_boards(pocket: &Pocket) -> u64 {
    if pocket.is_pair() {
        17_848
    } else {
        2_668
    }
}

/// Boards completing a full house.
pub fn full_house_boards(pocket: &Pocket) -> u64 {
    if pocket.is_pair() {
        176_880
    } else {
        46_464
    }
}

/// Boards completing a flush.
pub fn flush_boards(pocket: &Pocket) -> u64 {
    if pocket.is_suited() {
        138_000
    } else {
        41_450
    }
}

/// Boards completing a straight.
pub fn straight_boards(pocket: &Pocket) -> u64 {
    let [a, b] = pocket.cards();
    if pocket.is_pair() {
        return one_card_straight(a.value.to_raw());
    }
    let (gap, low) = pocket.connector_shape();
    let base = match gap {
        1 => match low {
            4..=10 => 193_500,
            3 | 11 => 150_272,
            2 | 12 => 106_134,
            _ => 69_954,
        },
        2 => match low {
            5..=8 => 164_600,
            3 | 4 | 9 | 10 => 157_700,
            2 | 11 => 114_092,
            _ => 77_912,
        },
        3 => match low {
            5..=7 => 136_500,
            4 | 8 => 129_018,
            2 | 3 | 9 | 10 => 121_500,
            _ => 85_870,
        },
        4 => match low {
            5 | 6 => 108_754,
            4 | 7 => 100_796,
            3 | 8 => 92_838,
            2 | 9 => 84_880,
            _ => 93_828,
        },
        // Too far apart to share a straight; each card draws its own.
        _ => {
            let spread = one_card_straight(a.value.to_raw()) + one_card_straight(b.value.to_raw());
            return discount(spread, 0.84);
        }
    };
    if pocket.is_suited() {
        discount(base, 0.9385)
    } else {
        base
    }
}

/// Boards completing three of a kind.
pub fn three_of_a_kind_boards(pocket: &Pocket) -> u64 {
    if pocket.is_pair() {
        253_000
    } else if pocket.is_suited() {
        discount(94_500, 0.98)
    } else {
        94_500
    }
}

/// Boards completing two pair.
pub fn two_pair_boards(pocket: &Pocket) -> u64 {
    if pocket.is_pair() {
        838_200
    } else if pocket.is_suited() {
        discount(478_500, 0.977)
    } else {
        478_500
    }
}

/// Boards completing exactly one pair, or `None` for a paired pocket,
/// where the count has no independent closed form.
pub fn one_pair_boards(pocket: &Pocket) -> Option<u64> {
    if pocket.is_pair() {
        None
    } else if pocket.is_suited() {
        Some(discount(955_000, 0.949))
    } else {
        Some(955_000)
    }
}

/// The player's eventual-hand category distribution from the pocket
/// alone.
///
/// Each closed-form count is divided by [`BOARD_COMBINATIONS`]; the
/// high-card bucket absorbs whatever mass the other eight categories
/// leave. For a paired pocket the pair category is forced to zero and the
/// residual lands in the high-card bucket as well.
pub fn distribution(pocket: &Pocket) -> Distribution {
    let denominator = BOARD_COMBINATIONS as f64;
    let mut probs = [0.0f64; 10];
    probs[0] = royal_flush_boards(pocket) as f64 / denominator;
    probs[1] = straight_flush_boards(pocket) as f64 / denominator;
    probs[2] = four_of_a_kind_boards(pocket) as f64 / denominator;
    probs[3] = full_house_boards(pocket) as f64 / denominator;
    probs[4] = flush_boards(pocket) as f64 / denominator;
    probs[5] = straight_boards(pocket) as f64 / denominator;
    probs[6] = three_of_a_kind_boards(pocket) as f64 / denominator;
    probs[7] = two_pair_boards(pocket) as f64 / denominator;
    match one_pair_boards(pocket) {
        Some(boards) => {
            probs[8] = boards as f64 / denominator;
            probs[9] = 1.0 - probs[..9].iter().sum::<f64>();
        }
        None => {
            probs[8] = 0.0;
            probs[9] = 1.0 - probs[..8].iter().sum::<f64>();
        }
    }
    Distribution::new(probs)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::Category;

    fn pocket(a: (u8, u8), b: (u8, u8)) -> Pocket {
        Pocket::new(
            Card::try_from_raw(a.0, a.1).unwrap(),
            Card::try_from_raw(b.0, b.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_royal_flush_shapes() {
        assert_eq!(1_084, royal_flush_boards(&pocket((14, 0), (13, 0))));
        assert_eq!(94, royal_flush_boards(&pocket((14, 0), (13, 1))));
        assert_eq!(49, royal_flush_boards(&pocket((14, 0), (2, 1))));
        assert_eq!(4, royal_flush_boards(&pocket((9, 0), (2, 1))));
    }

    #[test]
    fn test_straight_flush_tables() {
        // Offsuit pockets all share one count.
        assert_eq!(250, straight_flush_boards(&pocket((7, 0), (8, 1))));
        // Mid suited connector.
        assert_eq!(4_200, straight_flush_boards(&pocket((7, 0), (8, 0))));
        // K-A suited has a single non-royal window.
        assert_eq!(78, straight_flush_boards(&pocket((13, 0), (14, 0))));
        // One-gappers.
        assert_eq!(3_240, straight_flush_boards(&pocket((5, 0), (7, 0))));
        assert_eq!(122, straight_flush_boards(&pocket((12, 0), (14, 0))));
        // Wide suited cards fall back to the generic count.
        assert_eq!(250, straight_flush_boards(&pocket((2, 0), (9, 0))));
    }

    #[test]
    fn test_paired_pocket_counts() {
        let aces = pocket((14, 0), (14, 3));
        assert_eq!(17_848, four_of_a_kind_boards(&aces));
        assert_eq!(176_880, full_house_boards(&aces));
        assert_eq!(253_000, three_of_a_kind_boards(&aces));
        assert_eq!(838_200, two_pair_boards(&aces));
        assert_eq!(24_000, straight_boards(&aces));
        assert_eq!(None, one_pair_boards(&aces));

        let fives = pocket((5, 0), (5, 1));
        assert_eq!(49_000, straight_boards(&fives));
    }

    #[test]
    fn test_unpaired_pocket_counts() {
        let offsuit = pocket((13, 0), (9, 1));
        assert_eq!(2_668, four_of_a_kind_boards(&offsuit));
        assert_eq!(46_464, full_house_boards(&offsuit));
        assert_eq!(41_450, flush_boards(&offsuit));
        assert_eq!(94_500, three_of_a_kind_boards(&offsuit));
        assert_eq!(478_500, two_pair_boards(&offsuit));
        assert_eq!(Some(955_000), one_pair_boards(&offsuit));
    }

    #[test]
    fn test_suited_discounts_truncate() {
        let suited = pocket((13, 0), (9, 0));
        assert_eq!(138_000, flush_boards(&suited));
        assert_eq!(92_610, three_of_a_kind_boards(&suited));
        assert_eq!(467_494, two_pair_boards(&suited));
        assert_eq!(Some(906_295), one_pair_boards(&suited));
    }

    #[test]
    fn test_straight_tables() {
        // Suited connectors take the 0.9385 discount, truncated.
        assert_eq!(193_500, straight_boards(&pocket((7, 0), (8, 1))));
        assert_eq!(181_599, straight_boards(&pocket((7, 0), (8, 0))));
        // A-K plays high with the smallest window.
        assert_eq!(69_954, straight_boards(&pocket((14, 0), (13, 1))));
        // A-5 spans the wheel at gap four.
        assert_eq!(93_828, straight_boards(&pocket((14, 0), (5, 1))));
        // Gapped shapes.
        assert_eq!(164_600, straight_boards(&pocket((5, 0), (7, 1))));
        assert_eq!(129_018, straight_boards(&pocket((4, 0), (7, 1))));
        assert_eq!(100_796, straight_boards(&pocket((4, 0), (8, 1))));
        // Too wide to connect: both ranks draw alone, at a 0.84 discount.
        assert_eq!(61_572, straight_boards(&pocket((2, 0), (8, 1))));
        assert_eq!(60_732, straight_boards(&pocket((14, 0), (8, 1))));
    }

    #[test]
    fn test_distribution_sums_to_one() {
        for (a, b) in [
            ((14, 0), (14, 3)),
            ((14, 0), (13, 0)),
            ((7, 0), (8, 0)),
            ((7, 0), (2, 1)),
            ((2, 0), (2, 1)),
        ] {
            let dist = distribution(&pocket(a, b));
            assert_relative_eq!(1.0, dist.sum(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_pocket_aces_distribution() {
        let dist = distribution(&pocket((14, 0), (14, 3)));
        // 17848 / 2118760 quad boards.
        assert_relative_eq!(
            0.008_423_795_049_934_868,
            dist.get(Category::FourOfAKind),
            max_relative = 1e-12
        );
        // The pair slot is forced to zero; high card takes the residual.
        assert_eq!(0.0, dist.get(Category::OnePair));
        assert!(dist.get(Category::HighCard) > 0.0);
    }

    #[test]
    fn test_unpaired_distribution_keeps_pair_mass() {
        let dist = distribution(&pocket((14, 0), (13, 1)));
        assert_relative_eq!(
            955_000.0 / BOARD_COMBINATIONS as f64,
            dist.get(Category::OnePair),
            max_relative = 1e-12
        );
        assert!(dist.get(Category::HighCard) > 0.0);
    }

    #[test]
    fn test_baseline_is_the_published_table() {
        assert_relative_eq!(
            1.0 / 595.0,
            OPPONENT_BASELINE.get(Category::FourOfAKind),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            5.0 / 11.0,
            OPPONENT_BASELINE.get(Category::OnePair),
            max_relative = 1e-12
        );
    }
}
