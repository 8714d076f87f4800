//! Core data types for SEC filing lookups.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Ticker`] - Trading symbol, uppercased and trimmed
//! - [`Cik`] - SEC Central Index Key, zero-padded to 10 digits
//! - [`Company`] - Company reference information
//! - [`Filing`] - A single filing submission

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FilingsError, Result};

/// Width of a normalized CIK.
pub const CIK_WIDTH: usize = 10;

/// A trading symbol/ticker.
///
/// Tickers are trimmed and uppercased on creation and are never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parses a ticker, trimming whitespace and converting to uppercase.
    ///
    /// Returns [`FilingsError::InvalidInput`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FilingsError::InvalidInput(
                "Ticker must be a non-empty string".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = FilingsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = FilingsError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// SEC Central Index Key.
///
/// Always exactly [`CIK_WIDTH`] ASCII digits, zero-padded on the left.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cik(String);

impl Cik {
    /// Parses and normalizes a CIK.
    ///
    /// # Examples
    /// ```
    /// use filings_core::Cik;
    ///
    /// let cik = Cik::parse(" 320193 ").unwrap();
    /// assert_eq!(cik.as_str(), "0000320193");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.trim();
        if digits.is_empty() {
            return Err(FilingsError::InvalidInput(
                "CIK must be a non-empty string".to_string(),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FilingsError::InvalidInput(format!(
                "CIK must be numeric, got '{digits}'"
            )));
        }
        if digits.len() > CIK_WIDTH {
            return Err(FilingsError::InvalidInput(format!(
                "CIK '{digits}' is longer than {} digits",
                CIK_WIDTH
            )));
        }
        Ok(Self(format!("{digits:0>width$}", width = CIK_WIDTH)))
    }

    /// Returns the zero-padded CIK as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cik {
    type Err = FilingsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cik {
    type Error = FilingsError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<u64> for Cik {
    type Error = FilingsError;

    fn try_from(n: u64) -> Result<Self> {
        Self::parse(&n.to_string())
    }
}

impl From<Cik> for String {
    fn from(cik: Cik) -> Self {
        cik.0
    }
}

/// Company reference information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// Company name.
    pub name: String,
    /// SEC CIK number.
    pub cik: Cik,
}

impl Company {
    /// Creates a company from raw ticker and CIK strings.
    ///
    /// Fails with [`FilingsError::InvalidInput`] if either is malformed.
    pub fn new(ticker: &str, cik: &str, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            ticker: Ticker::parse(ticker)?,
            cik: Cik::parse(cik)?,
            name: name.into(),
        })
    }
}

/// A single filing submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filing {
    /// CIK of the filing company.
    pub cik: Cik,
    /// Company name as recorded on the filing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Form type (e.g. "10-K").
    pub form_type: String,
    /// Filing date. `None` when the source had no usable date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<NaiveDate>,
    /// Accession number (unique filing identifier).
    pub accession_number: String,
}

impl Filing {
    /// Creates a new filing with required fields.
    ///
    /// Fails with [`FilingsError::InvalidInput`] if the form type or accession
    /// number is blank.
    pub fn new(
        cik: Cik,
        form_type: impl Into<String>,
        filing_date: Option<NaiveDate>,
        accession_number: impl Into<String>,
    ) -> Result<Self> {
        let form_type = form_type.into().trim().to_string();
        let accession_number = accession_number.into().trim().to_string();
        if form_type.is_empty() {
            return Err(FilingsError::InvalidInput(
                "Filing form type must not be empty".to_string(),
            ));
        }
        if accession_number.is_empty() {
            return Err(FilingsError::InvalidInput(
                "Filing accession number must not be empty".to_string(),
            ));
        }
        Ok(Self {
            cik,
            company_name: None,
            form_type,
            filing_date,
            accession_number,
        })
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_normalization() {
        let ticker = Ticker::parse("  aapl ").unwrap();
        assert_eq!(ticker.as_str(), "AAPL");
        assert_eq!(ticker.to_string(), "AAPL");
    }

    #[test]
    fn test_ticker_rejects_blank() {
        assert!(matches!(
            Ticker::parse("   "),
            Err(FilingsError::InvalidInput(_))
        ));
        assert!(matches!(Ticker::parse(""), Err(FilingsError::InvalidInput(_))));
    }

    #[test]
    fn test_cik_padding() {
        let cik = Cik::parse("320193").unwrap();
        assert_eq!(cik.as_str(), "0000320193");
        assert_eq!(cik.as_str().len(), CIK_WIDTH);

        let already = Cik::parse("0000789019").unwrap();
        assert_eq!(already.as_str(), "0000789019");

        let numeric = Cik::try_from(1_045_810_u64).unwrap();
        assert_eq!(numeric.as_str(), "0001045810");
    }

    #[test]
    fn test_cik_rejects_bad_input() {
        assert!(Cik::parse("").is_err());
        assert!(Cik::parse("  ").is_err());
        assert!(Cik::parse("32O193").is_err());
        assert!(Cik::parse("-320193").is_err());
        assert!(Cik::parse("12345678901").is_err());
    }

    #[test]
    fn test_company_new() {
        let company = Company::new("aapl", "320193", "Apple Inc.").unwrap();
        assert_eq!(company.ticker.as_str(), "AAPL");
        assert_eq!(company.cik.as_str(), "0000320193");
        assert_eq!(company.name, "Apple Inc.");

        assert!(Company::new("", "", "").is_err());
    }

    #[test]
    fn test_filing_new_validates() {
        let cik = Cik::parse("320193").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 10, 1);

        let filing = Filing::new(cik.clone(), "10-K", date, "0000320193-24-000001")
            .unwrap()
            .with_company_name("Apple Inc.");
        assert_eq!(filing.cik.as_str(), "0000320193");
        assert_eq!(filing.form_type, "10-K");
        assert_eq!(filing.filing_date, date);
        assert_eq!(filing.company_name.as_deref(), Some("Apple Inc."));

        assert!(Filing::new(cik.clone(), " ", date, "0000320193-24-000001").is_err());
        assert!(Filing::new(cik, "10-K", date, "").is_err());
    }

    #[test]
    fn test_filing_json_uses_iso_date() {
        let cik = Cik::parse("320193").unwrap();
        let filing = Filing::new(
            cik,
            "10-K",
            NaiveDate::from_ymd_opt(2024, 11, 1),
            "0000320193-24-000123",
        )
        .unwrap();

        let value = serde_json::to_value(&filing).unwrap();
        assert_eq!(value["cik"], "0000320193");
        assert_eq!(value["filing_date"], "2024-11-01");
        assert_eq!(value["form_type"], "10-K");
        assert!(value.get("company_name").is_none());

        let back: Filing = serde_json::from_value(value).unwrap();
        assert_eq!(back, filing);
    }

    #[test]
    fn test_cik_deserialize_normalizes() {
        let cik: Cik = serde_json::from_str("\"789019\"").unwrap();
        assert_eq!(cik.as_str(), "0000789019");
        assert!(serde_json::from_str::<Cik>("\"abc\"").is_err());
    }
}
