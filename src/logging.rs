// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Diagnostic logging setup
//!
//! Logs always go to stderr: stdout carries nothing but the matrix line.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output for
/// this crate and warnings only without it.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "ghc_matrix=debug"
    } else {
        "ghc_matrix=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
