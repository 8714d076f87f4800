//! Provider traits for company and filing lookups.
//!
//! This module defines the core provider traits:
//!
//! - [`DataProvider`] - Base trait for all data sources
//! - [`CompanyDirectory`] - Ticker to company resolution
//! - [`FilingProvider`] - Filing listing for a company

use std::fmt::Debug;

use crate::{
    error::{FilingsError, Result},
    filter::FilingFilter,
    types::{Cik, Company, Filing, Ticker},
};

/// Base trait for all data sources.
pub trait DataProvider: Debug {
    /// Returns the name of this provider (e.g., "SEC EDGAR fixtures").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Source of company reference data.
pub trait CompanyDirectory: DataProvider {
    /// Resolves a ticker to a company.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns [`FilingsError::InvalidInput`] for a blank ticker and
    /// [`FilingsError::NotFound`] when the ticker is unknown.
    fn lookup_company(&self, ticker: &str) -> Result<Company>;

    /// Returns every ticker this directory knows, sorted.
    fn tickers(&self) -> Vec<Ticker>;

    /// Checks if a ticker is known.
    fn supports_ticker(&self, ticker: &str) -> Result<bool> {
        match self.lookup_company(ticker) {
            Ok(_) => Ok(true),
            Err(FilingsError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Source of filing records.
pub trait FilingProvider: DataProvider {
    /// Returns every filing this provider holds, in source order.
    fn filings(&self) -> &[Filing];

    /// Lists a company's filings matching `filter`, newest first.
    fn list_filings(&self, cik: &Cik, filter: &FilingFilter) -> Result<Vec<Filing>> {
        filter.apply(cik, self.filings())
    }

    /// Like [`list_filings`](Self::list_filings), but takes an unnormalized CIK.
    ///
    /// Returns [`FilingsError::InvalidInput`] if `cik` is blank or not numeric.
    fn list_filings_for(&self, cik: &str, filter: &FilingFilter) -> Result<Vec<Filing>> {
        let cik = Cik::parse(cik)?;
        self.list_filings(&cik, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct StaticProvider {
        companies: Vec<Company>,
        filings: Vec<Filing>,
    }

    impl DataProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        fn description(&self) -> &str {
            "In-memory test provider"
        }
    }

    impl CompanyDirectory for StaticProvider {
        fn lookup_company(&self, ticker: &str) -> Result<Company> {
            let ticker = Ticker::parse(ticker)?;
            self.companies
                .iter()
                .find(|c| c.ticker == ticker)
                .cloned()
                .ok_or_else(|| FilingsError::NotFound(ticker.to_string()))
        }

        fn tickers(&self) -> Vec<Ticker> {
            self.companies.iter().map(|c| c.ticker.clone()).collect()
        }
    }

    impl FilingProvider for StaticProvider {
        fn filings(&self) -> &[Filing] {
            &self.filings
        }
    }

    fn provider() -> StaticProvider {
        let apple = Company::new("AAPL", "320193", "Apple Inc.").unwrap();
        let filing = Filing::new(
            apple.cik.clone(),
            "10-K",
            NaiveDate::from_ymd_opt(2024, 11, 1),
            "0000320193-24-000123",
        )
        .unwrap();
        StaticProvider {
            companies: vec![apple],
            filings: vec![filing],
        }
    }

    #[test]
    fn test_supports_ticker() {
        let provider = provider();
        assert!(provider.supports_ticker("aapl").unwrap());
        assert!(!provider.supports_ticker("ZZZZ").unwrap());
        assert!(provider.supports_ticker(" ").is_err());
    }

    #[test]
    fn test_list_filings_for_parses_cik() {
        let provider = provider();
        let filter = FilingFilter::new();

        let results = provider.list_filings_for("320193", &filter).unwrap();
        assert_eq!(results.len(), 1);

        assert!(matches!(
            provider.list_filings_for("", &filter),
            Err(FilingsError::InvalidInput(_))
        ));
    }
}
