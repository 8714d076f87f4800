//! Persistence trait for saving filings.
//!
//! This module defines the [`FilingStore`] trait that provides a unified interface
//! for writing filings out, and [`DownloadReport`] which records the outcome of a
//! best-effort batch save.

use std::collections::HashSet;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    error::{DownloadFailure, FilingsError, Result},
    types::Filing,
};

/// Trait for persisting filings.
///
/// Implementations write one record per filing, keyed by accession number.
pub trait FilingStore: Debug {
    /// Where filings end up (a directory for file-backed stores).
    fn location(&self) -> &Path;

    /// Makes the destination ready for writes.
    ///
    /// Called once per batch before any [`save`](Self::save).
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Persists a single filing and returns the path it was written to.
    fn save(&self, filing: &Filing) -> Result<PathBuf>;

    /// Persists every filing, continuing past individual failures.
    ///
    /// Fails outright only if [`prepare`](Self::prepare) fails. Per-filing errors
    /// are collected in the returned report. A repeated accession number is
    /// saved once; later copies are skipped with a warning.
    fn save_all(&self, filings: &[Filing]) -> Result<DownloadReport> {
        self.prepare()?;

        let mut report = DownloadReport::default();
        let mut seen = HashSet::with_capacity(filings.len());
        for filing in filings {
            if !seen.insert(filing.accession_number.as_str()) {
                warn!(accession = %filing.accession_number, "Skipping duplicate accession number");
                continue;
            }
            match self.save(filing) {
                Ok(path) => {
                    debug!(path = %path.display(), "Saved filing");
                    report.saved.push(path);
                }
                Err(e) => {
                    warn!(accession = %filing.accession_number, error = %e, "Failed to save filing");
                    report.failures.push(DownloadFailure {
                        accession_number: filing.accession_number.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    /// Persists every filing and returns how many were written.
    ///
    /// Any per-filing failure is reported as [`FilingsError::Download`] after
    /// the whole batch has been attempted.
    fn download(&self, filings: &[Filing]) -> Result<usize> {
        self.save_all(filings)?.into_result().map(|saved| saved.len())
    }
}

/// Outcome of a batch save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Paths written, in input order.
    pub saved: Vec<PathBuf>,
    /// Filings that could not be written.
    pub failures: Vec<DownloadFailure>,
}

impl DownloadReport {
    /// Returns the number of filings written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.saved.len()
    }

    /// Returns true if every filing was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts the report into the saved paths, or a [`FilingsError::Download`]
    /// if anything failed.
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        if self.failures.is_empty() {
            Ok(self.saved)
        } else {
            Err(FilingsError::Download {
                written: self.saved.len(),
                failures: self.failures,
            })
        }
    }
}
