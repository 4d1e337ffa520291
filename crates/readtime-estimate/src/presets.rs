//! Built-in reading-speed presets.

use readtime_types::{Preset, Result};

use crate::Estimator;

/// Average reading speed.
///
/// 200 words per minute, 2 seconds per line of code, 12 seconds for the
/// first image with a 1 second decay per image until 10 images, after which
/// the time per image stays constant.
pub static STANDARD: Estimator = Estimator::new(200.0, 2.0, 12.0, 1.0, 10);

/// Faster reading experience.
///
/// 250 words per minute, 1 second per line of code, 10 seconds for the first
/// image with a 1 second decay per image until 8 images.
pub static FAST: Estimator = Estimator::new(250.0, 1.0, 10.0, 1.0, 8);

/// Slower reading experience.
///
/// 150 words per minute, 3 seconds per line of code, 15 seconds for the
/// first image with a 2 second decay per image until 12 images.
pub static SLOW: Estimator = Estimator::new(150.0, 3.0, 15.0, 2.0, 12);

impl Estimator {
    /// Returns the shared estimator for a preset.
    #[must_use]
    pub fn preset(preset: Preset) -> &'static Self {
        match preset {
            Preset::Standard => &STANDARD,
            Preset::Fast => &FAST,
            Preset::Slow => &SLOW,
        }
    }

    /// Returns the shared estimator for a preset name such as `"fast"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a known preset.
    pub fn named(name: &str) -> Result<&'static Self> {
        let preset: Preset = name.parse()?;
        Ok(Self::preset(preset))
    }
}

impl From<Preset> for Estimator {
    fn from(preset: Preset) -> Self {
        *Self::preset(preset)
    }
}
