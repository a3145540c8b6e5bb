use std::ops::Index;

use crate::core::category::Category;

/// A probability distribution over the ten hand categories, index-aligned
/// with [`Category`].
///
/// Computed distributions sum to 1 within floating tolerance. The one
/// deliberate exception is the fixed pre-flop opponent baseline, which is
/// calibration data reproduced verbatim rather than a normalized
/// histogram.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    probs: [f64; Category::COUNT],
}

impl Distribution {
    /// Wrap raw per-category probabilities.
    pub const fn new(probs: [f64; Category::COUNT]) -> Self {
        Distribution { probs }
    }

    /// Normalize a category histogram. `total` must be positive; stage
    /// logic guarantees there is always at least one completion to count.
    pub fn from_counts(counts: &[u64; Category::COUNT], total: u64) -> Self {
        debug_assert!(total > 0, "normalizing an empty histogram");
        let mut probs = [0.0; Category::COUNT];
        for (prob, &count) in probs.iter_mut().zip(counts) {
            *prob = count as f64 / total as f64;
        }
        Distribution { probs }
    }

    /// A distribution with all mass on one category, for a hand that is
    /// already fully determined.
    pub fn point(category: Category) -> Self {
        let mut probs = [0.0; Category::COUNT];
        probs[category.index()] = 1.0;
        Distribution { probs }
    }

    /// The probability of a category.
    pub fn get(&self, category: Category) -> f64 {
        self.probs[category.index()]
    }

    /// Total mass. 1.0 within tolerance for computed distributions.
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Iterate the probabilities in category-index order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.probs.iter().copied()
    }

    /// Probability that a hand drawn from this distribution beats one
    /// drawn from `opp`, comparing categories only.
    ///
    /// The player wins outright when their category index is strictly
    /// lower; matching categories (including two unmade hands both in
    /// the high-card bucket) are a 50/50 tie. Kickers are never
    /// consulted, so this is an approximation by construction.
    ///
    /// ```
    /// use holdem_odds::core::{Category, Distribution};
    ///
    /// let mine = Distribution::point(Category::Flush);
    /// let opp = Distribution::point(Category::OnePair);
    /// assert_eq!(1.0, mine.win_probability(&opp));
    /// assert_eq!(0.5, mine.win_probability(&mine));
    /// ```
    pub fn win_probability(&self, opp: &Distribution) -> f64 {
        let mut win = 0.0;
        // Mass of opponent categories strictly worse than the current one.
        let mut opp_behind = 0.0;
        for index in (0..Category::COUNT).rev() {
            win += self.probs[index] * (opp_behind + 0.5 * opp.probs[index]);
            opp_behind += opp.probs[index];
        }
        win
    }
}

impl Index<Category> for Distribution {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.probs[category.index()]
    }
}

impl From<[f64; Category::COUNT]> for Distribution {
    fn from(probs: [f64; Category::COUNT]) -> Self {
        Distribution::new(probs)
    }
}
