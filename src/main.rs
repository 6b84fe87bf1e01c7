// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! GHC CI Matrix (ghc-matrix) - Main Application
//!
//! Prints the list of supported GHC versions as a single
//! `::set-output name=ghc-matrix:: [...]` line, which CI workflows turn into
//! a build matrix. Diagnostics go to stderr; any failure exits with status 1
//! without printing the output line.

mod cli;

use std::io;
use std::process::exit;

use clap::{CommandFactory, Parser};

use ghc_matrix::{
    BuiltinCatalog, FileCatalog, ListStyle, MatrixError, MatrixOptions, VersionProvider,
    emit_matrix, logging,
};

use crate::cli::{Cli, ListFormat};

impl From<ListFormat> for ListStyle {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Json => ListStyle::Json,
            ListFormat::Repr => ListStyle::Repr,
        }
    }
}

/// Main application entry point
///
/// Parses command line arguments, sets up logging and prints the matrix.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Handle errors by printing to stderr and exiting with non-zero status
    if let Err(e) = run(&cli) {
        eprintln!("ghc-matrix: {e}");
        exit(1);
    }
}

/// Select the catalog and emit the matrix line on stdout
fn run(cli: &Cli) -> Result<(), MatrixError> {
    if cli.man {
        return print_man_page();
    }

    let provider: Box<dyn VersionProvider> = match &cli.catalog {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    };

    let options = MatrixOptions {
        name: cli.name.clone(),
        style: cli.format.into(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let versions = emit_matrix(provider.as_ref(), &options, &mut out)?;

    tracing::debug!("Published {} versions as {}", versions.len(), options.name);
    Ok(())
}

/// Render the man page for the current CLI definition
fn print_man_page() -> Result<(), MatrixError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    clap_mangen::Man::new(Cli::command()).render(&mut out)?;
    Ok(())
}
