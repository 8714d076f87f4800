use filings::FilingsError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Filings(#[from] FilingsError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Filings(FilingsError::InvalidInput(_)) => 2,
            Self::Filings(FilingsError::NotFound(_)) => 3,
            Self::Filings(FilingsError::DataSourceMissing(_) | FilingsError::Parse(_)) => 4,
            Self::Filings(FilingsError::Io { .. } | FilingsError::Download { .. }) => 5,
            Self::Serialization(_) | Self::Output(_) => 1,
        }
    }
}
