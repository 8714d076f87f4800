use std::io::Write;

use filings::{Company, DownloadReport, Filing};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

const DATE_WIDTH: usize = 10;
/// Minimum form column width; widened to the longest form type listed.
const FORM_WIDTH: usize = 8;
const RULE_WIDTH: usize = 45;

#[derive(Debug, Serialize)]
struct ListingDocument<'a> {
    company: &'a Company,
    filings: &'a [Filing],
}

pub(crate) fn render(
    out: &mut dyn Write,
    format: OutputFormat,
    company: &Company,
    filings: &[Filing],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&ListingDocument { company, filings })?;
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(out, company, filings)?,
    }
    Ok(())
}

fn render_table(
    out: &mut dyn Write,
    company: &Company,
    filings: &[Filing],
) -> Result<(), CliError> {
    writeln!(out, "\nCompany: {} (CIK {})\n", company.name, company.cik)?;

    if filings.is_empty() {
        writeln!(out, "No filings found for the given filters.")?;
        return Ok(());
    }

    let form_width = filings
        .iter()
        .map(|f| f.form_type.chars().count())
        .fold(FORM_WIDTH, usize::max);

    writeln!(
        out,
        "{:<DATE_WIDTH$} | {:<form_width$} | ACCESSION #",
        "DATE", "FORM"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH + form_width - FORM_WIDTH))?;
    for filing in filings {
        let date = filing
            .filing_date
            .map_or_else(|| String::from("-"), |d| d.to_string());
        writeln!(
            out,
            "{date:<DATE_WIDTH$} | {:<form_width$} | {}",
            filing.form_type, filing.accession_number
        )?;
    }
    Ok(())
}

pub(crate) fn render_download(
    out: &mut dyn Write,
    report: &DownloadReport,
    destination: &std::path::Path,
) -> Result<(), CliError> {
    for path in &report.saved {
        writeln!(out, "Saved: {}", path.display())?;
    }
    writeln!(
        out,
        "\n{} filings saved to '{}/'",
        report.written(),
        destination.display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use filings::Cik;
    use std::path::{Path, PathBuf};

    fn apple() -> Company {
        Company::new("AAPL", "320193", "Apple Inc.").unwrap()
    }

    fn filings() -> Vec<Filing> {
        let cik = Cik::parse("320193").unwrap();
        vec![
            Filing::new(
                cik.clone(),
                "10-K",
                NaiveDate::from_ymd_opt(2024, 11, 1),
                "0000320193-24-000123",
            )
            .unwrap(),
            Filing::new(cik, "8-K", None, "0000320193-24-000150").unwrap(),
        ]
    }

    fn rendered(format: OutputFormat, filings: &[Filing]) -> String {
        let mut buf = Vec::new();
        render(&mut buf, format, &apple(), filings).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let text = rendered(OutputFormat::Table, &filings());
        let lines: Vec<&str> = text.lines().collect();

        assert!(text.contains("Company: Apple Inc. (CIK 0000320193)"));
        assert!(lines.contains(&"DATE       | FORM     | ACCESSION #"));
        assert!(lines.contains(&"2024-11-01 | 10-K     | 0000320193-24-000123"));
        assert!(lines.contains(&"-          | 8-K      | 0000320193-24-000150"));
    }

    #[test]
    fn test_long_form_types_widen_column() {
        let cik = Cik::parse("320193").unwrap();
        let filings = vec![
            Filing::new(
                cik.clone(),
                "NT 10-K/A",
                NaiveDate::from_ymd_opt(2024, 12, 2),
                "0000320193-24-000160",
            )
            .unwrap(),
            Filing::new(
                cik,
                "10-K",
                NaiveDate::from_ymd_opt(2024, 11, 1),
                "0000320193-24-000123",
            )
            .unwrap(),
        ];
        let text = rendered(OutputFormat::Table, &filings);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.contains(&"DATE       | FORM      | ACCESSION #"));
        assert!(lines.contains(&"2024-12-02 | NT 10-K/A | 0000320193-24-000160"));
        assert!(lines.contains(&"2024-11-01 | 10-K      | 0000320193-24-000123"));
        assert!(lines.contains(&"-".repeat(46).as_str()));
    }

    #[test]
    fn test_empty_table_message() {
        let text = rendered(OutputFormat::Table, &[]);
        assert!(text.contains("No filings found for the given filters."));
        assert!(!text.contains("ACCESSION #"));
    }

    #[test]
    fn test_json_document() {
        let text = rendered(OutputFormat::Json, &filings());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["company"]["ticker"], "AAPL");
        assert_eq!(value["company"]["cik"], "0000320193");
        assert_eq!(value["filings"][0]["filing_date"], "2024-11-01");
        assert!(value["filings"][1].get("filing_date").is_none());
    }

    #[test]
    fn test_download_summary() {
        let report = DownloadReport {
            saved: vec![PathBuf::from("downloads/A-1.json")],
            failures: Vec::new(),
        };
        let mut buf = Vec::new();
        render_download(&mut buf, &report, Path::new("downloads")).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Saved: downloads/A-1.json"));
        assert!(text.contains("1 filings saved to 'downloads/'"));
    }
}
