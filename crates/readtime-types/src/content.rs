//! Measured content counts.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// The three measurable inputs of a reading-time estimate.
///
/// Counting is the caller's job (e.g. a markdown pipeline walking its AST);
/// this type only carries the totals. Counts are unsigned, so a negative
/// count can never reach the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentStats {
    /// Number of prose words.
    pub words: u64,
    /// Number of embedded images.
    pub images: u64,
    /// Number of lines inside code blocks.
    pub lines_of_code: u64,
}

impl ContentStats {
    /// Creates content stats from the three counts.
    #[must_use]
    pub const fn new(words: u64, images: u64, lines_of_code: u64) -> Self {
        Self {
            words,
            images,
            lines_of_code,
        }
    }

    /// Stats for plain prose with no images or code.
    #[must_use]
    pub const fn words_only(words: u64) -> Self {
        Self::new(words, 0, 0)
    }

    /// Returns true if every count is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0 && self.images == 0 && self.lines_of_code == 0
    }
}

impl Add for ContentStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            words: self.words.saturating_add(rhs.words),
            images: self.images.saturating_add(rhs.images),
            lines_of_code: self.lines_of_code.saturating_add(rhs.lines_of_code),
        }
    }
}

impl AddAssign for ContentStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ContentStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
