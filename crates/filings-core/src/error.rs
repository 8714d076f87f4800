//! Error types for filing operations.
//!
//! This module defines [`FilingsError`] which covers every failure that can occur
//! when loading the static data source, looking up companies, filtering filings
//! or persisting them to disk.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during filing operations.
#[derive(Error, Debug)]
pub enum FilingsError {
    /// Caller-supplied input was rejected (empty ticker, bad limit, bad date).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested ticker is not in the company table.
    #[error("Company with ticker '{0}' not found")]
    NotFound(String),

    /// The static data source could not be located.
    #[error("Data source missing: {0}")]
    DataSourceMissing(String),

    /// A data source file exists but could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Some filings in a batch could not be persisted.
    #[error("{} of {} filings failed to save: {}", failures.len(), written + failures.len(), FailureList(failures))]
    Download {
        /// Number of filings written successfully.
        written: usize,
        /// Filings that failed, with the reason for each.
        failures: Vec<DownloadFailure>,
    },
}

impl FilingsError {
    /// Wraps an I/O error together with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single filing that could not be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadFailure {
    /// Accession number of the failed filing.
    pub accession_number: String,
    /// Human-readable reason.
    pub reason: String,
}

impl fmt::Display for DownloadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.accession_number, self.reason)
    }
}

struct FailureList<'a>(&'a [DownloadFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// Result type alias using [`FilingsError`].
pub type Result<T> = std::result::Result<T, FilingsError>;
