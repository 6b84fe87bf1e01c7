// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error type shared by the catalog and the matrix printer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("catalog entry {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("catalog entry {index}: field `{field}` must be a string, found {found}")]
    InvalidField {
        index: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("catalog entry {index}: expected an object, found {found}")]
    MalformedRecord { index: usize, found: &'static str },

    #[error("catalog entry {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog is not a JSON array of version records: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("cannot read version catalog {}: {source}", .path.display())]
    ProviderUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize version list: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
