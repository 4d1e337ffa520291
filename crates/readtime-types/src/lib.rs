//! Core value types for the readtime reading-time estimator.
//!
//! This crate provides the plain data structures shared by the readtime crates:
//!
//! - [`ContentStats`] - Word, image and code-line counts of a document
//! - [`ReadingTime`] - Estimated reading time split per component
//! - [`Preset`] - Identifier of a built-in reading-speed parameter set
//! - [`ReadtimeError`] - Errors from parsing caller input

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lazarcloud/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod content;
mod error;
mod preset;
mod reading_time;

pub use content::ContentStats;
pub use error::{PresetParseError, ReadtimeError, Result};
pub use preset::Preset;
pub use reading_time::ReadingTime;
