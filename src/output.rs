// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Rendering of the version matrix as a CI `set-output` directive
//!
//! The printer projects the `version` field out of every catalog record,
//! serializes the resulting list and writes a single line of the form
//! `::set-output name=ghc-matrix:: ["9.6.2", "9.4.6"]` to its writer.

use std::io::Write;

use tracing::{debug, warn};

use crate::catalog::duplicate_versions;
use crate::{MatrixError, VersionProvider, VersionRecord};

/// Workflow command used to publish a step output
pub const SET_OUTPUT_COMMAND: &str = "::set-output";

/// Output name the CI workflow reads the matrix from
pub const DEFAULT_OUTPUT_NAME: &str = "ghc-matrix";

/// Serialization of the version list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// JSON array, e.g. `["9.6.2", "9.4.6"]`
    #[default]
    Json,
    /// Python list notation, e.g. `['9.6.2', '9.4.6']`
    Repr,
}

/// Options controlling the emitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixOptions {
    /// Name of the step output
    pub name: String,
    /// Serialization of the list
    pub style: ListStyle,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_OUTPUT_NAME.to_string(),
            style: ListStyle::default(),
        }
    }
}

/// Project the version strings out of the records, keeping their order
#[must_use]
pub fn project_versions(records: &[VersionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.version.as_str()).collect()
}

/// Serialize a list of versions
///
/// Elements are separated by `", "` in both styles; an empty list renders as `[]`.
///
/// # Errors
/// Returns `Serialize` if a JSON element cannot be encoded
pub fn render_list(versions: &[&str], style: ListStyle) -> Result<String, MatrixError> {
    let items = match style {
        ListStyle::Json => versions
            .iter()
            .map(|v| serde_json::to_string(v).map_err(MatrixError::Serialize))
            .collect::<Result<Vec<_>, _>>()?,
        ListStyle::Repr => versions.iter().map(|v| python_repr(v)).collect(),
    };

    Ok(format!("[{}]", items.join(", ")))
}

/// Quote a string the way Python's `repr` does
///
/// Single quotes unless the string contains `'` and no `"`. Characters that
/// would not print as themselves are escaped, so the result never spans
/// more than one line.
fn python_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut repr = String::with_capacity(s.len() + 2);
    repr.push(quote);
    for c in s.chars() {
        match c {
            '\\' => repr.push_str("\\\\"),
            '\n' => repr.push_str("\\n"),
            '\r' => repr.push_str("\\r"),
            '\t' => repr.push_str("\\t"),
            c if c == quote => {
                repr.push('\\');
                repr.push(c);
            }
            c if c == ' ' || !is_unprintable(c) => repr.push(c),
            c => {
                let code = u32::from(c);
                if code < 0x100 {
                    repr.push_str(&format!("\\x{code:02x}"));
                } else if code < 0x1_0000 {
                    repr.push_str(&format!("\\u{code:04x}"));
                } else {
                    repr.push_str(&format!("\\U{code:08x}"));
                }
            }
        }
    }
    repr.push(quote);
    repr
}

// Controls, separators other than space and invisible format characters.
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{00ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
        )
}

/// Build the complete `set-output` line, without the trailing newline
///
/// # Errors
/// Returns an error if the list cannot be serialized
pub fn set_output_line(
    name: &str,
    versions: &[&str],
    style: ListStyle,
) -> Result<String, MatrixError> {
    let list = render_list(versions, style)?;
    Ok(format!("{SET_OUTPUT_COMMAND} name={name}:: {list}"))
}

/// Write one line in a single write and flush it
///
/// # Errors
/// Returns `Output` if writing or flushing fails
pub fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), MatrixError> {
    out.write_all(format!("{line}\n").as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Read the catalog from a provider and print the matrix line
///
/// The whole catalog is loaded and validated before anything is written, so
/// a failing provider never produces a partial line.
///
/// # Arguments
/// * `provider` - Where the versions come from
/// * `options` - Output name and list style
/// * `out` - Destination of the line (stdout in the CLI)
///
/// # Returns
/// The versions that were emitted, in output order
///
/// # Errors
/// Returns the provider's error, or an error if the line cannot be written
pub fn emit_matrix<P, W>(
    provider: &P,
    options: &MatrixOptions,
    out: &mut W,
) -> Result<Vec<String>, MatrixError>
where
    P: VersionProvider + ?Sized,
    W: Write,
{
    debug!("Loading versions from {}", provider.describe());
    let records = provider.list_versions()?;
    debug!("Loaded {} version records", records.len());

    for record in &records {
        debug!(version = %record.version, url = %record.bindist_url(), "catalog entry");
    }

    let duplicates = duplicate_versions(&records);
    if !duplicates.is_empty() {
        warn!("Catalog declares duplicate versions: {}", duplicates.join(", "));
    }

    let versions = project_versions(&records);
    let line = set_output_line(&options.name, &versions, options.style)?;
    write_line(out, &line)?;

    Ok(versions.into_iter().map(str::to_string).collect())
}
