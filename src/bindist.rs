// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Bindist locations and artifact filtering for catalog entries
//!
//! GHC publishes each release under its own directory on downloads.haskell.org,
//! together with a `SHA256SUMS` file listing every archive. The ignore
//! prefixes and suffixes of a catalog entry decide which of those archives
//! are relevant.

use crate::VersionRecord;

/// Base URL where GHC binary distributions are hosted
pub const GHC_DOWNLOADS_BASE: &str = "https://downloads.haskell.org/~ghc";

/// Name of the checksum listing published next to each release
pub const CHECKSUMS_FILE: &str = "SHA256SUMS";

/// A bindist archive listed in a release's checksum file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the release directory (e.g. "ghc-9.6.2-x86_64-deb10-linux.tar.xz")
    pub file_name: String,
    /// Hex-encoded SHA-256 of the archive
    pub sha256: String,
}

impl VersionRecord {
    /// Directory URL holding the bindists of this release
    #[must_use]
    pub fn bindist_url(&self) -> String {
        format!("{GHC_DOWNLOADS_BASE}/{}/", self.version)
    }

    /// URL of the checksum listing for this release
    #[must_use]
    pub fn checksums_url(&self) -> String {
        format!("{}{CHECKSUMS_FILE}", self.bindist_url())
    }

    /// Check whether an archive should be kept for this release
    ///
    /// A leading `./` is ignored, as checksum files list archives that way.
    #[must_use]
    pub fn accepts_artifact(&self, file_name: &str) -> bool {
        let name = file_name.strip_prefix("./").unwrap_or(file_name);

        let ignored_prefix = self.ignore_prefixes.iter().any(|p| name.starts_with(p));
        let ignored_suffix = self.ignore_suffixes.iter().any(|s| name.ends_with(s));

        !(ignored_prefix || ignored_suffix)
    }

    /// Select the archives of this release from a `SHA256SUMS` listing
    ///
    /// Each line is `<sha256> <file>`; lines that do not have both fields are
    /// skipped. The listing order is kept.
    ///
    /// # Arguments
    /// * `listing` - Content of the release's checksum file
    ///
    /// # Returns
    /// The accepted artifacts, with the leading `./` removed from file names
    #[must_use]
    pub fn select_artifacts(&self, listing: &str) -> Vec<Artifact> {
        listing
            .lines()
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let sha256 = fields.next()?;
                let file_name = fields.next()?;
                Some((sha256, file_name))
            })
            .filter(|(_, file_name)| self.accepts_artifact(file_name))
            .map(|(sha256, file_name)| Artifact {
                file_name: file_name
                    .strip_prefix("./")
                    .unwrap_or(file_name)
                    .to_string(),
                sha256: sha256.to_string(),
            })
            .collect()
    }
}
