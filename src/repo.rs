//! Repository root discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ScaffoldError;
use crate::vcs::VersionControl;

/// Resolved repository root and whether version control answered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocation {
    pub root: PathBuf,
    pub vcs_available: bool,
}

/// Walk upward from `start` (inclusive) to the first directory containing any
/// of `markers`.
pub fn find_marker_root(start: &Path, markers: &[&str]) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| markers.iter().any(|marker| dir.join(marker).exists()))
        .map(Path::to_path_buf)
}

/// Resolve the repository root, preferring the version-control tool's answer
/// and falling back to the marker search.
pub fn locate(
    start: &Path,
    config: &Config,
    vcs: &dyn VersionControl,
) -> Result<RepositoryLocation, ScaffoldError> {
    match vcs.repository_root() {
        Ok(root) => {
            debug!("Repository root from version control: {}", root.display());
            return Ok(RepositoryLocation {
                root,
                vcs_available: true,
            });
        }
        Err(e) => {
            warn!(
                "Version control did not report a repository root ({}); searching for markers",
                e
            );
        }
    }

    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());

    find_marker_root(&start, &config.markers())
        .map(|root| RepositoryLocation {
            root,
            vcs_available: false,
        })
        .ok_or(ScaffoldError::RepositoryRootNotFound { start })
}
