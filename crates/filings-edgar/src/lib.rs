#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filings/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR company and filing data backed by local fixture files.
//!
//! This crate provides:
//!
//! - Ticker to CIK lookup from a `company_tickers.json` table
//! - Filing listings from a `filing_sample.json` collection
//! - Load-time validation: malformed entries are logged and skipped
//!
//! # Example
//!
//! ```no_run
//! use filings_core::{CompanyDirectory, FilingFilter, FilingProvider};
//! use filings_edgar::EdgarProvider;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = EdgarProvider::from_dir("fixtures")?;
//!
//!     let company = provider.lookup_company("AAPL")?;
//!     println!("Company: {} (CIK {})", company.name, company.cik);
//!
//!     let filter = FilingFilter::new().with_form_type("10-K").with_limit(5)?;
//!     for filing in provider.list_filings(&company.cik, &filter)? {
//!         println!("{:?} {}", filing.filing_date, filing.accession_number);
//!     }
//!
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use filings_core::{
    Cik, Company, CompanyDirectory, DataProvider, Filing, FilingProvider, FilingsError, Result,
    Ticker,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// File name of the ticker table inside a fixtures directory.
pub const COMPANY_TICKERS_FILE: &str = "company_tickers.json";

/// File name of the filing collection inside a fixtures directory.
pub const FILINGS_FILE: &str = "filing_sample.json";

/// Date format used by EDGAR for filing dates.
const FILING_DATE_FORMAT: &str = "%Y-%m-%d";

/// SEC EDGAR data provider over static data.
///
/// Holds the ticker table and the filing collection in memory. Both are
/// validated once at load time and never change afterwards.
#[derive(Debug, Clone, Default)]
pub struct EdgarProvider {
    companies: BTreeMap<Ticker, Company>,
    filings: Vec<Filing>,
}

impl EdgarProvider {
    /// Create a provider from already-validated records.
    ///
    /// If two companies share a ticker, the last one wins.
    pub fn new(companies: impl IntoIterator<Item = Company>, filings: Vec<Filing>) -> Self {
        let companies = companies
            .into_iter()
            .map(|c| (c.ticker.clone(), c))
            .collect();
        Self {
            companies,
            filings,
        }
    }

    /// Load a provider from a fixtures directory.
    ///
    /// # Errors
    /// Returns [`FilingsError::DataSourceMissing`] if the directory or either
    /// file is absent, and [`FilingsError::Parse`] if a file is not valid JSON
    /// of the expected shape.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(FilingsError::DataSourceMissing(format!(
                "fixture directory {} does not exist",
                dir.display()
            )));
        }

        let companies = read_source(&dir.join(COMPANY_TICKERS_FILE))?;
        let filings = read_source(&dir.join(FILINGS_FILE))?;
        let provider = Self::from_json(&companies, &filings)?;

        info!(
            companies = provider.companies.len(),
            filings = provider.filings.len(),
            "Loaded EDGAR fixtures"
        );
        Ok(provider)
    }

    /// Load a provider from the contents of the two fixture files.
    pub fn from_json(company_tickers: &str, filings: &str) -> Result<Self> {
        let companies = parse_company_tickers(company_tickers)?;
        let filings = parse_filings(filings)?;
        Ok(Self::new(companies, filings))
    }

    /// Returns the number of companies in the ticker table.
    #[must_use]
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }
}

impl DataProvider for EdgarProvider {
    fn name(&self) -> &str {
        "SEC EDGAR"
    }

    fn description(&self) -> &str {
        "SEC EDGAR company tickers and filing index, served from local fixtures"
    }
}

impl CompanyDirectory for EdgarProvider {
    fn lookup_company(&self, ticker: &str) -> Result<Company> {
        let ticker = Ticker::parse(ticker)?;

        match self.companies.get(&ticker) {
            Some(company) => {
                debug!("Found CIK {} for ticker {}", company.cik, ticker);
                Ok(company.clone())
            }
            None => Err(FilingsError::NotFound(ticker.to_string())),
        }
    }

    fn tickers(&self) -> Vec<Ticker> {
        self.companies.keys().cloned().collect()
    }
}

impl FilingProvider for EdgarProvider {
    fn filings(&self) -> &[Filing] {
        &self.filings
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            FilingsError::DataSourceMissing(format!("could not find {}", path.display()))
        }
        _ => FilingsError::io(path, e),
    })
}

// =============================================================================
// Ticker Table
// =============================================================================

/// Parse a `company_tickers.json` document into validated companies.
///
/// Entries with a missing or malformed CIK, or of the wrong JSON shape, are
/// skipped with a warning. Only a document that is not a JSON object fails.
pub fn parse_company_tickers(json: &str) -> Result<Vec<Company>> {
    let data: HashMap<String, serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| FilingsError::Parse(format!("Failed to parse company tickers: {e}")))?;

    let mut companies = Vec::with_capacity(data.len());
    for (key, value) in data {
        let company = serde_json::from_value::<TickerEntry>(value)
            .map_err(|e| FilingsError::Parse(e.to_string()))
            .and_then(|entry| entry.into_company(&key));
        match company {
            Ok(company) => companies.push(company),
            Err(e) => warn!(entry = %key, error = %e, "Skipping company ticker entry"),
        }
    }
    companies.sort_by(|a, b| a.ticker.cmp(&b.ticker));
    Ok(companies)
}

/// A CIK as it appears in source JSON: SEC uses integers, fixtures often use strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawCik {
    Number(u64),
    Text(String),
}

impl RawCik {
    fn normalize(&self) -> Result<Cik> {
        match self {
            Self::Number(n) => Cik::try_from(*n),
            Self::Text(s) => Cik::parse(s),
        }
    }
}

/// One entry of a ticker table, in either supported layout.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TickerEntry {
    /// SEC layout, keyed by row index.
    Sec(CompanyTickerInfo),
    /// Fixture layout, keyed by ticker.
    Keyed(KeyedCompany),
}

/// Company ticker information from SEC JSON.
#[derive(Debug, Deserialize)]
struct CompanyTickerInfo {
    /// CIK as a number (SEC returns this as an integer)
    cik_str: RawCik,
    /// Ticker symbol
    ticker: String,
    /// Company name
    title: String,
}

/// Company entry whose ticker is the map key.
#[derive(Debug, Deserialize)]
struct KeyedCompany {
    #[serde(default)]
    cik: Option<RawCik>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl TickerEntry {
    fn into_company(self, key: &str) -> Result<Company> {
        match self {
            Self::Sec(info) => Ok(Company {
                ticker: Ticker::parse(&info.ticker)?,
                cik: info.cik_str.normalize()?,
                name: info.title,
            }),
            Self::Keyed(entry) => {
                let ticker = Ticker::parse(key)?;
                let cik = entry
                    .cik
                    .ok_or_else(|| {
                        FilingsError::InvalidInput(format!("Company data for {ticker} missing CIK"))
                    })?
                    .normalize()?;
                let name = entry
                    .name
                    .or(entry.title)
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| ticker.to_string());
                Ok(Company { ticker, cik, name })
            }
        }
    }
}

// =============================================================================
// Filing Collection
// =============================================================================

/// Parse a `filing_sample.json` document into validated filings.
///
/// Records with a malformed CIK, form type or accession number are skipped with
/// a warning, whatever JSON type the bad field has. Missing or unparseable
/// dates are kept as `None`.
pub fn parse_filings(json: &str) -> Result<Vec<Filing>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| FilingsError::Parse(format!("Failed to parse filings: {e}")))?;

    let mut filings = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let filing = serde_json::from_value::<FilingRecord>(value)
            .map_err(|e| FilingsError::Parse(e.to_string()))
            .and_then(FilingRecord::into_filing);
        match filing {
            Ok(filing) => filings.push(filing),
            Err(e) => warn!(index, error = %e, "Skipping filing record"),
        }
    }
    Ok(filings)
}

/// A filing record as stored in the fixture file.
#[derive(Debug, Deserialize)]
struct FilingRecord {
    #[serde(default)]
    cik: Option<RawCik>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    form_type: Option<String>,
    /// Kept loose so a non-string date does not fail the whole file
    #[serde(default)]
    filing_date: Option<serde_json::Value>,
    #[serde(default)]
    accession_number: Option<String>,
}

impl FilingRecord {
    fn into_filing(self) -> Result<Filing> {
        let cik = self
            .cik
            .ok_or_else(|| FilingsError::InvalidInput("Filing missing CIK".to_string()))?
            .normalize()?;
        let accession_number = self.accession_number.unwrap_or_default();
        let filing_date = parse_filing_date(self.filing_date.as_ref(), &accession_number);

        let filing = Filing::new(
            cik,
            self.form_type.unwrap_or_default(),
            filing_date,
            accession_number,
        )?;
        Ok(match self.company_name {
            Some(name) if !name.trim().is_empty() => filing.with_company_name(name),
            _ => filing,
        })
    }
}

fn parse_filing_date(value: Option<&serde_json::Value>, accession: &str) -> Option<NaiveDate> {
    let raw = match value {
        None | Some(serde_json::Value::Null) => {
            debug!(accession, "Filing has no date");
            return None;
        }
        Some(serde_json::Value::String(s)) => s.trim(),
        Some(other) => {
            warn!(accession, value = %other, "Filing date is not a string");
            return None;
        }
    };

    match NaiveDate::parse_from_str(raw, FILING_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(accession, value = raw, error = %e, "Unparseable filing date");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
