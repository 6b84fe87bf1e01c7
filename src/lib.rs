// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! GHC CI Matrix Library
//!
//! This library provides the catalog of supported GHC releases and the
//! printer that publishes their version numbers as a CI `set-output`
//! directive, so that later workflow steps can build one job per version.

pub mod bindist;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod output;

// Re-export commonly used items at the crate root for convenience
pub use bindist::{Artifact, GHC_DOWNLOADS_BASE};
pub use catalog::{BuiltinCatalog, FileCatalog, VersionProvider, VersionRecord, parse_catalog};
pub use error::MatrixError;
pub use output::{
    DEFAULT_OUTPUT_NAME, ListStyle, MatrixOptions, emit_matrix, project_versions, render_list,
    set_output_line,
};
