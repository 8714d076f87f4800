//! Filing selection: form type, date range and result limit.
//!
//! [`FilingFilter::apply`] is the filter/sort engine. It is a pure function of
//! the CIK, the filter and the filing slice it is given.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{FilingsError, Result};
use crate::types::{Cik, Filing};

/// Criteria for selecting a company's filings.
///
/// An empty filter selects every filing, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingFilter {
    /// Form types to keep (exact, case-insensitive). Empty keeps all.
    pub form_types: Vec<String>,
    /// Inclusive lower bound on the filing date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the filing date.
    pub date_to: Option<NaiveDate>,
    /// Maximum number of filings to return.
    pub limit: Option<usize>,
}

impl FilingFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a form type to match.
    #[must_use]
    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        let form_type = form_type.into().trim().to_string();
        if !form_type.is_empty() {
            self.form_types.push(form_type);
        }
        self
    }

    /// Replaces the form types to match. Blank entries are dropped.
    #[must_use]
    pub fn with_form_types<I, S>(self, form_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cleared = Self {
            form_types: Vec::new(),
            ..self
        };
        form_types
            .into_iter()
            .fold(cleared, |filter, form| filter.with_form_type(form))
    }

    /// Sets the inclusive lower date bound.
    #[must_use]
    pub const fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Sets the inclusive upper date bound.
    #[must_use]
    pub const fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Sets the result limit.
    ///
    /// Fails with [`FilingsError::InvalidInput`] unless `limit` is positive.
    pub fn with_limit(mut self, limit: i64) -> Result<Self> {
        self.limit = Some(positive_limit(limit)?);
        Ok(self)
    }

    /// Returns true if either date bound is set.
    #[must_use]
    pub const fn has_date_bound(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// Checks the filter for contradictory or out-of-range settings.
    pub fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(FilingsError::InvalidInput(
                "limit must be a positive integer".to_string(),
            ));
        }
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) if from > to => Err(FilingsError::InvalidInput(format!(
                "date_from {from} is after date_to {to}"
            ))),
            _ => Ok(()),
        }
    }

    /// Returns true if `filing` satisfies the form and date criteria.
    ///
    /// Ownership (CIK) is not checked here.
    #[must_use]
    pub fn matches(&self, filing: &Filing) -> bool {
        if !self.form_types.is_empty()
            && !self
                .form_types
                .iter()
                .any(|form| form.eq_ignore_ascii_case(&filing.form_type))
        {
            return false;
        }

        if !self.has_date_bound() {
            return true;
        }

        let Some(date) = filing.filing_date else {
            return false;
        };
        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }

    /// Selects `cik`'s filings from `filings`, newest first, truncated to the limit.
    ///
    /// Undated filings sort after dated ones; ties are broken by accession
    /// number, descending.
    pub fn apply(&self, cik: &Cik, filings: &[Filing]) -> Result<Vec<Filing>> {
        self.validate()?;

        let mut selected: Vec<Filing> = filings
            .iter()
            .filter(|f| &f.cik == cik && self.matches(f))
            .cloned()
            .collect();
        selected.sort_by(newest_first);

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }

        trace!(
            cik = %cik,
            candidates = filings.len(),
            selected = selected.len(),
            "Applied filing filter"
        );
        Ok(selected)
    }
}

/// Ordering used for filing listings: date descending, then accession descending.
#[must_use]
pub fn newest_first(a: &Filing, b: &Filing) -> Ordering {
    b.filing_date
        .cmp(&a.filing_date)
        .then_with(|| b.accession_number.cmp(&a.accession_number))
}

fn positive_limit(limit: i64) -> Result<usize> {
    if limit <= 0 {
        return Err(FilingsError::InvalidInput(format!(
            "limit must be a positive integer, got {limit}"
        )));
    }
    usize::try_from(limit)
        .map_err(|_| FilingsError::InvalidInput(format!("limit {limit} is too large")))
}
