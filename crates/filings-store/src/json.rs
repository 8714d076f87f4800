//! Directory-backed JSON store.

use filings_core::{Filing, FilingStore, FilingsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Directory used when none is configured.
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Writes each filing as `<accession_number>.json` inside a directory.
///
/// The directory is created (with parents) on the first batch.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
    pretty: bool,
}

impl Default for JsonDirStore {
    fn default() -> Self {
        Self::new(DEFAULT_DOWNLOAD_DIR)
    }
}

impl JsonDirStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pretty: true,
        }
    }

    /// Write compact JSON instead of pretty-printed.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Returns the file path a filing would be written to.
    ///
    /// Fails with [`FilingsError::InvalidInput`] if the accession number cannot be
    /// used as a plain file name.
    pub fn path_for(&self, filing: &Filing) -> Result<PathBuf> {
        let accession = filing.accession_number.as_str();
        if accession.is_empty()
            || accession == "."
            || accession == ".."
            || accession.contains(['/', '\\', '\0'])
        {
            return Err(FilingsError::InvalidInput(format!(
                "accession number '{accession}' is not a valid file name"
            )));
        }
        Ok(self.dir.join(format!("{accession}.json")))
    }
}

impl FilingStore for JsonDirStore {
    fn location(&self) -> &Path {
        &self.dir
    }

    fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| FilingsError::io(&self.dir, e))
    }

    #[instrument(skip(self, filing), fields(accession = %filing.accession_number))]
    fn save(&self, filing: &Filing) -> Result<PathBuf> {
        let path = self.path_for(filing)?;
        let body = if self.pretty {
            serde_json::to_string_pretty(filing)
        } else {
            serde_json::to_string(filing)
        }
        .map_err(|e| FilingsError::Parse(format!("Failed to serialize filing: {e}")))?;

        fs::write(&path, body).map_err(|e| FilingsError::io(&path, e))?;
        debug!(path = %path.display(), "Wrote filing");
        Ok(path)
    }
}
