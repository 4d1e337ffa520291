//! Named reading-speed presets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::PresetParseError;

/// Identifier of one of the built-in reading-speed parameter sets.
///
/// The parameter values themselves live with the estimator; this type only
/// names them so callers can pick one from user input or serialized data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Average reader: 200 wpm, 2 s/line, 12 s first image, 1 s decay over 10 images.
    #[default]
    Standard,
    /// Skimming reader: 250 wpm, 1 s/line, 10 s first image, 1 s decay over 8 images.
    Fast,
    /// Careful reader: 150 wpm, 3 s/line, 15 s first image, 2 s decay over 12 images.
    Slow,
}

impl Preset {
    /// Returns the preset name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Fast => "fast",
            Self::Slow => "slow",
        }
    }

    /// Returns all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Standard, Self::Fast, Self::Slow]
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "default" | "normal" => Ok(Self::Standard),
            "fast" | "quick" => Ok(Self::Fast),
            "slow" | "careful" => Ok(Self::Slow),
            _ => Err(PresetParseError(s.to_string())),
        }
    }
}
