#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filings/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Persistence backends for filings.
//!
//! This crate provides implementations of the [`FilingStore`] trait from `filings-core`:
//!
//! - [`JsonDirStore`] - One JSON file per filing in a local directory

/// JSON-file-per-filing store.
pub mod json;

// Re-export the trait for convenience
pub use filings_core::FilingStore;

pub use json::{DEFAULT_DOWNLOAD_DIR, JsonDirStore};
