#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filings/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for SEC filing lookups.
//!
//! This crate provides the foundational abstractions shared by the data source,
//! the persistence layer and the command-line surface:
//!
//! - [`Company`](types::Company) and [`Filing`](types::Filing) - validated value types
//! - [`FilingFilter`](filter::FilingFilter) - form, date range and limit selection
//! - [`CompanyDirectory`](provider::CompanyDirectory) - ticker to company resolution
//! - [`FilingProvider`](provider::FilingProvider) - filing listing for a company
//! - [`FilingStore`](store::FilingStore) - persistence abstraction

/// Error types for filing operations.
pub mod error;
/// Filing filter and the filter/sort engine.
pub mod filter;
/// Provider traits for company and filing lookups.
pub mod provider;
/// Persistence trait and batch reporting.
pub mod store;
/// Core data types (Ticker, Cik, Company, Filing).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DownloadFailure, FilingsError, Result};
pub use filter::FilingFilter;
pub use provider::{CompanyDirectory, DataProvider, FilingProvider};
pub use store::{DownloadReport, FilingStore};
pub use types::{Cik, Company, Filing, Ticker};
