// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! GHC version catalog
//!
//! This module owns the list of GHC releases the CI matrix is built from.
//! Catalogs are JSON arrays of version records; every record is validated
//! when the catalog is parsed, so a malformed entry is rejected before any
//! output is produced.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::MatrixError;

/// Name of the mandatory field of every catalog entry
pub const VERSION_FIELD: &str = "version";

/// Catalog compiled into the binary, newest release series first
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/ghc_versions.json");

/// One GHC release as declared in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionRecord {
    /// Version string (e.g. "9.6.2")
    pub version: String,
    /// Bindist file name prefixes to skip for this release
    #[serde(default)]
    pub ignore_prefixes: Vec<String>,
    /// Bindist file name suffixes to skip for this release
    #[serde(default)]
    pub ignore_suffixes: Vec<String>,
}

impl VersionRecord {
    /// Create a record with no artifact filters
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ignore_prefixes: Vec::new(),
            ignore_suffixes: Vec::new(),
        }
    }

    /// Validate and convert one catalog entry
    ///
    /// # Arguments
    /// * `index` - Position of the entry in the catalog, used in error messages
    /// * `entry` - The raw JSON value of the entry
    ///
    /// # Errors
    /// Returns `MalformedRecord` if the entry is not an object, `MissingField`
    /// if it has no `version`, `InvalidField` if `version` is not a string and
    /// `InvalidRecord` if any optional field has the wrong shape.
    pub fn from_entry(index: usize, entry: Value) -> Result<Self, MatrixError> {
        let version_type = match &entry {
            Value::Object(fields) => fields.get(VERSION_FIELD).map(json_type_name),
            other => {
                return Err(MatrixError::MalformedRecord {
                    index,
                    found: json_type_name(other),
                });
            }
        };

        match version_type {
            None => Err(MatrixError::MissingField {
                index,
                field: VERSION_FIELD,
            }),
            Some("string") => serde_json::from_value(entry)
                .map_err(|source| MatrixError::InvalidRecord { index, source }),
            Some(found) => Err(MatrixError::InvalidField {
                index,
                field: VERSION_FIELD,
                found,
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse a catalog document into typed records
///
/// Entries are validated in order and the first invalid one aborts the parse.
/// The declared order of the entries is preserved.
///
/// # Errors
/// Returns `Syntax` if the document is not a JSON array, or the error of the
/// first invalid entry.
pub fn parse_catalog(json: &str) -> Result<Vec<VersionRecord>, MatrixError> {
    let entries: Vec<Value> = serde_json::from_str(json).map_err(MatrixError::Syntax)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| VersionRecord::from_entry(index, entry))
        .collect()
}

/// Versions declared more than once, each reported once
#[must_use]
pub fn duplicate_versions(records: &[VersionRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        let version = record.version.as_str();
        if !seen.insert(version) && reported.insert(version) {
            duplicates.push(version);
        }
    }

    duplicates
}

/// Source of the ordered list of GHC versions
pub trait VersionProvider {
    /// Short human-readable description of where the versions come from
    fn describe(&self) -> String;

    /// List every known version in declared order
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read or has an invalid entry
    fn list_versions(&self) -> Result<Vec<VersionRecord>, MatrixError>;
}

/// The catalog shipped with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl VersionProvider for BuiltinCatalog {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn list_versions(&self) -> Result<Vec<VersionRecord>, MatrixError> {
        parse_catalog(BUILTIN_CATALOG_JSON)
    }
}

/// A catalog read from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionProvider for FileCatalog {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn list_versions(&self) -> Result<Vec<VersionRecord>, MatrixError> {
        let content =
            fs::read_to_string(&self.path).map_err(|source| MatrixError::ProviderUnavailable {
                path: self.path.clone(),
                source,
            })?;
        parse_catalog(&content)
    }
}
