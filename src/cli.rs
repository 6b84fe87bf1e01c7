// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for ghc-matrix
//
// The same definition backs argument parsing and the `--man` page.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Serialization of the version list on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// JSON array, e.g. ["9.6.2", "9.4.6"]
    Json,
    /// Python list notation, e.g. ['9.6.2', '9.4.6']
    Repr,
}

/// CLI argument parser
#[derive(Parser)]
#[command(
    name = "ghc-matrix",
    version,
    about = "Print the supported GHC versions as a CI set-output directive",
    disable_version_flag = true
)]
#[command(arg(clap::Arg::new("version").long("version").action(clap::ArgAction::Version).help("Print version")))]
pub struct Cli {
    /// Read the version catalog from a JSON file instead of the built-in one
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Name of the step output to set
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        default_value = "ghc-matrix",
        value_parser = parse_output_name
    )]
    pub name: String,

    /// Serialization of the version list
    #[arg(short = 'f', long = "format", value_enum, default_value_t = ListFormat::Json)]
    pub format: ListFormat,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the man page (roff) to stdout and exit
    #[arg(long = "man", conflicts_with_all = ["catalog", "name", "format"])]
    pub man: bool,
}

fn parse_output_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("output name must not be empty".to_string());
    }
    if let Some(c) = s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!(
            "invalid character {c:?} in output name (use letters, digits, '-' or '_')"
        ));
    }
    Ok(s.to_string())
}
