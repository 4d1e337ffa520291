//! Error types for readtime.

use thiserror::Error;

/// Result type alias for readtime operations.
pub type Result<T> = std::result::Result<T, ReadtimeError>;

/// Errors surfaced by the readtime crates.
///
/// Estimation itself never fails; errors only arise when turning
/// caller-supplied text into readtime values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadtimeError {
    /// Unknown preset name.
    #[error(transparent)]
    Preset(#[from] PresetParseError),
}

/// Error returned when parsing an invalid preset name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid preset '{0}', expected one of: standard, fast, slow")]
pub struct PresetParseError(pub(crate) String);

impl PresetParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}
