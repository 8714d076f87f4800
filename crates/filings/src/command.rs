use std::io::Write;

use filings::{
    CompanyDirectory, EdgarProvider, Filing, FilingProvider, FilingStore, FilingsError,
    JsonDirStore,
};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Runs one lookup: validate flags, load fixtures, resolve the ticker, list,
/// render and optionally download.
///
/// Results go to `out`; download progress goes to `out` for tables and to
/// `notes` for JSON so that `out` stays a single document.
pub(crate) fn run(cli: &Cli, out: &mut dyn Write, notes: &mut dyn Write) -> Result<(), CliError> {
    let filter = cli.filter()?;
    debug!(?filter, "Parsed filing filter");

    let provider = EdgarProvider::from_dir(&cli.fixtures).map_err(with_fixture_hint)?;
    let company = provider.lookup_company(&cli.ticker)?;
    info!(ticker = %company.ticker, cik = %company.cik, "Resolved company");

    let filings = provider.list_filings(&company.cik, &filter)?;
    output::render(out, cli.output, &company, &filings)?;

    if !cli.download || filings.is_empty() {
        return Ok(());
    }

    let store = JsonDirStore::new(&cli.out_dir);
    match cli.output {
        OutputFormat::Table => download(out, &store, &filings),
        OutputFormat::Json => download(notes, &store, &filings),
    }
}

fn download(
    progress: &mut dyn Write,
    store: &JsonDirStore,
    filings: &[Filing],
) -> Result<(), CliError> {
    writeln!(progress, "\nDownloading filings...")?;

    let report = store.save_all(filings)?;
    output::render_download(progress, &report, store.location())?;

    report.into_result()?;
    Ok(())
}

fn with_fixture_hint(err: FilingsError) -> FilingsError {
    match err {
        FilingsError::DataSourceMissing(msg) => FilingsError::DataSourceMissing(format!(
            "{msg}. Could not find fixture data; point --fixtures or FILINGS_FIXTURES_DIR \
             at a directory containing company_tickers.json and filing_sample.json"
        )),
        other => other,
    }
}
