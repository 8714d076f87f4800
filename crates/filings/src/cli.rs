//! CLI argument definitions.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--form` | all | Form types to keep (exact, case-insensitive) |
//! | `--limit` | none | Maximum number of filings |
//! | `--date_from` / `--date_to` | none | Inclusive filing date range |
//! | `--download` | `false` | Save each listed filing as JSON |
//! | `--fixtures` | `fixtures` | Directory holding the EDGAR fixture files |
//! | `--out-dir` | `downloads` | Destination for `--download` |
//! | `--output` | `table` | Output format (table, json) |

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use filings::{DEFAULT_DOWNLOAD_DIR, FilingFilter, FilingsError};

/// Date format accepted on the command line.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Look up SEC filings by ticker symbol.
#[derive(Debug, Parser)]
#[command(
    name = "filings",
    author,
    version,
    about = "Look up SEC filings by ticker symbol",
    after_help = "Example: filings AAPL --form 10-K --limit 5"
)]
pub(crate) struct Cli {
    /// Company ticker symbol (e.g., AAPL).
    pub(crate) ticker: String,

    /// Filter by form types (e.g., 10-K 10-Q).
    #[arg(long = "form", value_name = "TYPE", num_args = 1..)]
    pub(crate) form_types: Vec<String>,

    /// Limit number of results.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub(crate) limit: Option<i64>,

    /// Start date (YYYY-MM-DD), inclusive.
    #[arg(long = "date_from", value_name = "YYYY-MM-DD")]
    pub(crate) date_from: Option<String>,

    /// End date (YYYY-MM-DD), inclusive.
    #[arg(long = "date_to", value_name = "YYYY-MM-DD")]
    pub(crate) date_to: Option<String>,

    /// Save filings locally as JSON.
    #[arg(long, default_value_t = false)]
    pub(crate) download: bool,

    /// Directory containing company_tickers.json and filing_sample.json.
    #[arg(long, env = "FILINGS_FIXTURES_DIR", default_value = "fixtures")]
    pub(crate) fixtures: PathBuf,

    /// Directory that --download writes into.
    #[arg(long, env = "FILINGS_DOWNLOAD_DIR", default_value = DEFAULT_DOWNLOAD_DIR)]
    pub(crate) out_dir: PathBuf,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

/// How results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Fixed-width table.
    Table,
    /// Pretty-printed JSON document.
    Json,
}

impl Cli {
    /// Builds the filing filter from the flags, validating dates and limit.
    pub(crate) fn filter(&self) -> Result<FilingFilter, FilingsError> {
        let mut filter = FilingFilter::new().with_form_types(self.form_types.iter().cloned());

        if let Some(raw) = &self.date_from {
            filter = filter.with_date_from(parse_date("date_from", raw)?);
        }
        if let Some(raw) = &self.date_to {
            filter = filter.with_date_to(parse_date("date_to", raw)?);
        }
        if let Some(limit) = self.limit {
            filter = filter.with_limit(limit)?;
        }

        filter.validate()?;
        Ok(filter)
    }
}

fn parse_date(flag: &str, raw: &str) -> Result<NaiveDate, FilingsError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        FilingsError::InvalidInput(format!("--{flag} expects YYYY-MM-DD, got '{raw}'"))
    })
}
