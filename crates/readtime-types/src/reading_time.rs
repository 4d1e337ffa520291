//! Per-component reading-time breakdown.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;
use std::time::Duration;

/// A reading-time estimate split into its three components.
///
/// Each component is already rounded to whole seconds; [`total`](Self::total)
/// adds the rounded components rather than rounding a grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Time spent reading prose.
    pub words: Duration,
    /// Time spent looking at images.
    pub images: Duration,
    /// Time spent reading code.
    pub code: Duration,
}

impl ReadingTime {
    /// Creates a breakdown from its components.
    #[must_use]
    pub const fn new(words: Duration, images: Duration, code: Duration) -> Self {
        Self {
            words,
            images,
            code,
        }
    }

    /// Creates an empty estimate (zero in every component).
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// Returns the sum of all components.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.words
            .saturating_add(self.images)
            .saturating_add(self.code)
    }

    /// Returns the total in whole seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.total().as_secs()
    }

    /// Returns the total in (fractional) minutes.
    #[must_use]
    pub const fn total_minutes(&self) -> f64 {
        self.total().as_secs_f64() / 60.0
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.words.is_zero() && self.images.is_zero() && self.code.is_zero()
    }
}

impl Add for ReadingTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            words: self.words.saturating_add(rhs.words),
            images: self.images.saturating_add(rhs.images),
            code: self.code.saturating_add(rhs.code),
        }
    }
}

impl Sum for ReadingTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<ReadingTime> for Duration {
    fn from(value: ReadingTime) -> Self {
        value.total()
    }
}
