//! Exhaustive enumeration of board completions.
//!
//! Post-flop distributions come from classifying every way the remaining
//! deck can complete a hand: a base of already-known cards is unioned
//! with each `draw`-card combination, classified, and tallied into a
//! ten-bucket histogram. The work is a pure function per combination, so
//! large stages fan out over a fixed four-worker pool and reduce the
//! partial histograms at the end; results are identical to the serial
//! path either way.

use std::sync::OnceLock;

use rayon::prelude::*;
use tracing::trace;

use crate::core::{Card, CardBitSet, CardCombinations, Classify, Deck, Distribution};

/// Fixed size of the enumeration worker pool.
const WORKERS: usize = 4;

/// Below this many combinations the fan-out costs more than it saves.
const PARALLEL_CUTOFF: u64 = 5_000;

/// The shared worker pool, built on first use. `None` if the pool could
/// not be built, in which case enumeration stays serial.
fn worker_pool() -> Option<&'static rayon::ThreadPool> {
    static POOL: OnceLock<Option<rayon::ThreadPool>> = OnceLock::new();
    POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(WORKERS)
            .build()
            .ok()
    })
    .as_ref()
}

/// Number of `take`-card draws from `n` cards.
pub(crate) fn combination_count(n: u64, take: u64) -> u64 {
    if take > n {
        return 0;
    }
    let take = take.min(n - take);
    let mut count = 1u64;
    for step in 0..take {
        count = count * (n - step) / (step + 1);
    }
    count
}

fn serial_histogram(cards: &[Card], draw: usize, base: CardBitSet) -> [u64; 10] {
    let mut histogram = [0u64; 10];
    for combo in CardCombinations::new(cards, draw) {
        histogram[(combo | base).category().index()] += 1;
    }
    histogram
}

fn merge_histograms(mut left: [u64; 10], right: [u64; 10]) -> [u64; 10] {
    for (total, partial) in left.iter_mut().zip(right) {
        *total += partial;
    }
    left
}

/// Classify every completion of `base` by `draw` cards drawn from the
/// deck. Returns the per-category counts and the number of completions
/// enumerated.
pub fn completion_histogram(deck: &Deck, draw: usize, base: CardBitSet) -> ([u64; 10], u64) {
    let cards = deck.to_vec();
    let total = combination_count(cards.len() as u64, draw as u64);
    trace!(draw, combinations = total, "enumerating board completions");

    let pool = if total >= PARALLEL_CUTOFF {
        worker_pool()
    } else {
        None
    };
    let histogram = match pool {
        Some(pool) => {
            let combos: Vec<CardBitSet> = CardCombinations::new(&cards, draw).collect();
            pool.install(|| {
                combos
                    .par_iter()
                    .fold(
                        || [0u64; 10],
                        |mut histogram, combo| {
                            histogram[(*combo | base).category().index()] += 1;
                            histogram
                        },
                    )
                    .reduce(|| [0u64; 10], merge_histograms)
            })
        }
        None => serial_histogram(&cards, draw, base),
    };
    (histogram, total)
}

/// The normalized completion histogram.
pub fn completion_distribution(deck: &Deck, draw: usize, base: CardBitSet) -> Distribution {
    let (histogram, total) = completion_histogram(deck, draw, base);
    Distribution::from_counts(&histogram, total)
}
