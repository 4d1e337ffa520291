//! Estimate how long it takes to read a blog post.
//!
//! This is a facade crate that re-exports functionality from the readtime
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use readtime_lib::prelude::*;
//! use std::time::Duration;
//!
//! // Counts come from whatever parses the post (markdown AST, HTML, ...).
//! let stats = ContentStats::new(100, 5, 20);
//!
//! let estimate = STANDARD.estimate(&stats);
//! assert_eq!(estimate.words, Duration::from_secs(30));
//! assert_eq!(estimate.images, Duration::from_secs(12 + 11 + 10 + 9 + 8));
//! assert_eq!(estimate.code, Duration::from_secs(40));
//! assert_eq!(estimate.total(), STANDARD.total_time(100, 5, 20));
//!
//! // Presets can be picked by name and tweaked without touching the shared value.
//! let preset: Preset = "slow".parse()?;
//! let patient = Estimator::from(preset).with_seconds_per_line(4.0);
//! assert_eq!(patient.code_time(20), Duration::from_secs(80));
//!
//! // Name lookups report unknown presets through the crate `Result`.
//! let fast = Estimator::named("fast")?;
//! assert_eq!(fast.words_time(250), Duration::from_secs(60));
//! assert!(Estimator::named("speedy").is_err());
//! # Ok::<(), ReadtimeError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lazarcloud/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use readtime_types::*;

// Re-export the estimator and its presets
pub use readtime_estimate::{Estimator, FAST, SLOW, STANDARD};

/// Prelude module for convenient imports.
///
/// ```
/// use readtime_lib::prelude::*;
/// ```
pub mod prelude {
    pub use readtime_types::{
        ContentStats, Preset, PresetParseError, ReadingTime, ReadtimeError, Result,
    };

    pub use readtime_estimate::{Estimator, FAST, SLOW, STANDARD};
}
