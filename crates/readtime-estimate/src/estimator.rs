//! Reading-time estimation logic.

use std::time::Duration;

use readtime_types::{ContentStats, ReadingTime};
use serde::{Deserialize, Serialize};

use crate::presets::STANDARD;

/// Seconds in one minute, used to turn a words-per-minute rate into seconds.
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Reading-time estimator.
///
/// Holds the five tunable parameters of the model. Construction never
/// validates anything; non-positive or otherwise odd values only affect the
/// calculations, which always return a non-negative whole-second duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimator {
    /// Prose reading rate.
    words_per_minute: f64,
    /// Seconds charged per line of code.
    seconds_per_line: f64,
    /// Seconds charged for the first image.
    base_image_seconds: f64,
    /// Per-image reduction inside the decay bracket.
    image_seconds_decay: f64,
    /// Number of images the decay applies to.
    image_threshold: i64,
}

impl Estimator {
    /// Creates a new estimator with custom parameters.
    #[must_use]
    pub const fn new(
        words_per_minute: f64,
        seconds_per_line: f64,
        base_image_seconds: f64,
        image_seconds_decay: f64,
        image_threshold: i64,
    ) -> Self {
        Self {
            words_per_minute,
            seconds_per_line,
            base_image_seconds,
            image_seconds_decay,
            image_threshold,
        }
    }

    /// Returns the prose reading rate in words per minute.
    #[must_use]
    pub const fn words_per_minute(&self) -> f64 {
        self.words_per_minute
    }

    /// Returns the seconds charged per line of code.
    #[must_use]
    pub const fn seconds_per_line(&self) -> f64 {
        self.seconds_per_line
    }

    /// Returns the seconds charged for the first image.
    #[must_use]
    pub const fn base_image_seconds(&self) -> f64 {
        self.base_image_seconds
    }

    /// Returns the per-image reduction applied inside the decay bracket.
    #[must_use]
    pub const fn image_seconds_decay(&self) -> f64 {
        self.image_seconds_decay
    }

    /// Returns the number of images the decay applies to.
    #[must_use]
    pub const fn image_threshold(&self) -> i64 {
        self.image_threshold
    }

    /// Returns a copy with a different reading rate.
    #[must_use]
    pub const fn with_words_per_minute(mut self, words_per_minute: f64) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Returns a copy with a different per-line code time.
    #[must_use]
    pub const fn with_seconds_per_line(mut self, seconds_per_line: f64) -> Self {
        self.seconds_per_line = seconds_per_line;
        self
    }

    /// Returns a copy with a different first-image time.
    #[must_use]
    pub const fn with_base_image_seconds(mut self, base_image_seconds: f64) -> Self {
        self.base_image_seconds = base_image_seconds;
        self
    }

    /// Returns a copy with a different per-image decay.
    #[must_use]
    pub const fn with_image_seconds_decay(mut self, image_seconds_decay: f64) -> Self {
        self.image_seconds_decay = image_seconds_decay;
        self
    }

    /// Returns a copy with a different decay bracket length.
    #[must_use]
    pub const fn with_image_threshold(mut self, image_threshold: i64) -> Self {
        self.image_threshold = image_threshold;
        self
    }

    /// Estimates every component for the given content.
    ///
    /// Components are rounded independently, so `estimate(..).total()` is
    /// always exactly [`total_time`](Self::total_time) for the same counts.
    #[must_use]
    pub fn estimate(&self, stats: &ContentStats) -> ReadingTime {
        ReadingTime::new(
            self.words_time(stats.words),
            self.images_time(stats.images),
            self.code_time(stats.lines_of_code),
        )
    }

    /// Calculates the total reading time of a document.
    ///
    /// Equal to `words_time + images_time + code_time`, each rounded to whole
    /// seconds before summing.
    #[must_use]
    pub fn total_time(
        &self,
        total_words: u64,
        total_images: u64,
        total_lines_of_code: u64,
    ) -> Duration {
        self.estimate(&ContentStats::new(
            total_words,
            total_images,
            total_lines_of_code,
        ))
        .total()
    }

    /// Calculates the time spent reading prose.
    ///
    /// A non-positive (or NaN) reading rate means there is no usable speed
    /// and yields zero rather than a division fault.
    #[must_use]
    pub fn words_time(&self, total_words: u64) -> Duration {
        if self.words_per_minute.is_nan() || self.words_per_minute <= 0.0 {
            tracing::debug!(
                words_per_minute = self.words_per_minute,
                total_words,
                "Non-positive reading rate, words time is zero"
            );
            return Duration::ZERO;
        }

        // Per-word time first, then scale: the product must round the same
        // way as `words * (60 / wpm)` on exact half-second ties.
        let seconds_per_word = SECONDS_PER_MINUTE / self.words_per_minute;
        whole_seconds(total_words as f64 * seconds_per_word)
    }

    /// Calculates the time spent looking at images.
    ///
    /// The first `image_threshold` images cost `base - (i - 1) * decay`
    /// seconds each (for image `i`, counting from 1). Every later image costs
    /// the same as the last one inside that bracket. A contribution that
    /// would be negative counts as zero.
    #[must_use]
    pub fn images_time(&self, total_images: u64) -> Duration {
        let bracket = self.decay_bracket_len().min(total_images);
        let (mut seconds, mut floored) =
            (0..bracket).fold((0.0, 0_u64), |(sum, floored), index| {
                let raw = self.raw_image_seconds(index);
                if raw >= 0.0 {
                    (sum + raw, floored)
                } else {
                    (sum, floored + 1)
                }
            });

        // Past the bracket every image costs the capped amount, so multiply
        // instead of iterating.
        let remaining = total_images - bracket;
        if remaining > 0 {
            let cap = self.raw_image_seconds(self.cap_index());
            if cap >= 0.0 {
                seconds += remaining as f64 * cap;
            } else {
                floored += remaining;
            }
        }

        if floored > 0 {
            tracing::debug!(
                total_images,
                floored,
                "Image time contributions floored to zero"
            );
        }

        whole_seconds(seconds)
    }

    /// Calculates the time spent reading code.
    #[must_use]
    pub fn code_time(&self, total_lines_of_code: u64) -> Duration {
        whole_seconds(total_lines_of_code as f64 * self.seconds_per_line)
    }

    /// Returns the constant per-image charge beyond the decay bracket, in seconds.
    ///
    /// This is the cost of the last image inside the bracket, floored at zero.
    /// A threshold of zero or less leaves no bracket, so every image costs
    /// the base time.
    #[must_use]
    pub fn image_cap_seconds(&self) -> f64 {
        self.raw_image_seconds(self.cap_index()).max(0.0)
    }

    /// Number of leading images the decay applies to.
    fn decay_bracket_len(&self) -> u64 {
        u64::try_from(self.image_threshold).unwrap_or(0)
    }

    /// Zero-based index whose decayed cost every image past the bracket pays.
    fn cap_index(&self) -> u64 {
        self.decay_bracket_len().saturating_sub(1)
    }

    /// Unfloored cost of the image at a zero-based index inside the bracket.
    fn raw_image_seconds(&self, index: u64) -> f64 {
        self.base_image_seconds - index as f64 * self.image_seconds_decay
    }
}

impl Default for Estimator {
    fn default() -> Self {
        STANDARD
    }
}

/// Rounds seconds half away from zero, clamping negative and NaN values to zero.
fn whole_seconds(seconds: f64) -> Duration {
    if seconds > 0.0 {
        // `as` saturates, so an infinite value becomes `u64::MAX` seconds.
        Duration::from_secs(seconds.round() as u64)
    } else {
        Duration::ZERO
    }
}
