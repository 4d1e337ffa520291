//! Reading-time estimation from word, image and code-line counts.
//!
//! This crate turns the measurable size of a piece of content into an
//! estimated reading time:
//!
//! - [`Estimator`] - Holds the model parameters and computes each component
//! - [`STANDARD`], [`FAST`], [`SLOW`] - Shared built-in parameter sets, also
//!   reachable by name through [`Estimator::named`]
//!
//! Every calculation is a pure, total function returning a whole-second
//! [`Duration`](std::time::Duration). Degenerate parameters (a non-positive
//! reading rate, decay that drives image time negative) degrade to zero
//! instead of failing.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lazarcloud/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod presets;

pub use estimator::Estimator;
pub use presets::{FAST, SLOW, STANDARD};
