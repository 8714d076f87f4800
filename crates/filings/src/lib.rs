#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filings/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Unified interface for SEC filing lookups.
//!
//! Re-exports the core types and traits together with the fixture-backed
//! [`EdgarProvider`] and the [`JsonDirStore`] persistence backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use filings::{CompanyDirectory, EdgarProvider, FilingFilter, FilingProvider, FilingStore, JsonDirStore};
//!
//! let provider = EdgarProvider::from_dir("fixtures")?;
//! let apple = provider.lookup_company("AAPL")?;
//! let filings = provider.list_filings(&apple.cik, &FilingFilter::new().with_limit(3)?)?;
//!
//! let saved = JsonDirStore::new("downloads").download(&filings)?;
//! println!("{saved} filings saved");
//! ```

// Core types and traits
pub use filings_core::*;

// Data source
pub use filings_edgar::EdgarProvider;

// Persistence
pub use filings_store::{DEFAULT_DOWNLOAD_DIR, JsonDirStore};
