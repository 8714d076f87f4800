//! `filings` command-line entry point.

mod cli;
mod command;
mod error;
mod output;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = {
        let mut out = io::stdout().lock();
        let mut notes = io::stderr().lock();
        command::run(&cli, &mut out, &mut notes)
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
