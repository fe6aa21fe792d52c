//! Branch/folder reconciliation and spec seeding.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{self, Config};
use crate::error::ScaffoldError;
use crate::models::{ReconcileAction, SpecOrigin};
use crate::vcs::VersionControl;

/// The branch and directory a run settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub branch_name: String,
    pub feature_dir: PathBuf,
    pub action: ReconcileAction,
}

/// Decide between reusing the current branch's folder, adopting the current
/// branch, or starting a new branch named `candidate`, and perform it.
///
/// Branch creation is best-effort; directory creation must succeed.
pub fn reconcile(
    candidate: &str,
    repo_root: &Path,
    config: &Config,
    vcs: &dyn VersionControl,
    vcs_available: bool,
) -> Result<Reconciliation, ScaffoldError> {
    let specs_root = config.specs_root(repo_root);

    let current = if vcs_available {
        match vcs.current_branch() {
            Ok(branch) => Some(branch),
            Err(e) => {
                warn!(
                    "Could not determine the current branch ({}); skipping reuse of an existing branch",
                    e
                );
                None
            }
        }
    } else {
        None
    };

    if let Some(branch) = current.filter(|b| !b.is_empty()) {
        let existing = specs_root.join(&branch);
        if existing.is_dir() {
            info!(
                "Reusing existing feature directory {} for branch '{}'",
                existing.display(),
                branch
            );
            return Ok(Reconciliation {
                branch_name: branch,
                feature_dir: existing,
                action: ReconcileAction::Reused,
            });
        }

        if !config::is_trunk(&branch) {
            info!("Adopting current branch '{}'", branch);
            create_dir(&existing)?;
            return Ok(Reconciliation {
                branch_name: branch,
                feature_dir: existing,
                action: ReconcileAction::AdoptedBranch,
            });
        }
    }

    let branch_created = if vcs_available {
        match vcs.create_branch(candidate) {
            Ok(()) => {
                info!("Created and switched to branch '{}'", candidate);
                true
            }
            Err(e) => {
                warn!(
                    "Could not create branch '{}' ({}); continuing with directory setup only",
                    candidate, e
                );
                false
            }
        }
    } else {
        warn!(
            "Version control unavailable; skipped branch creation for '{}'",
            candidate
        );
        false
    };

    let feature_dir = specs_root.join(candidate);
    create_dir(&feature_dir)?;

    Ok(Reconciliation {
        branch_name: candidate.to_string(),
        feature_dir,
        action: ReconcileAction::Created { branch_created },
    })
}

fn create_dir(dir: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(dir).map_err(ScaffoldError::io(format!(
        "Failed to create feature directory {}",
        dir.display()
    )))
}

/// The feature's spec file and where its content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSpec {
    pub path: PathBuf,
    pub origin: SpecOrigin,
}

/// Make sure `<feature_dir>/spec.md` exists without ever overwriting it.
pub fn seed_spec(
    feature_dir: &Path,
    repo_root: &Path,
    config: &Config,
) -> Result<SeededSpec, ScaffoldError> {
    let path = feature_dir.join(config::SPEC_FILE_NAME);

    if path.exists() {
        info!("Spec file already exists at {}", path.display());
        return Ok(SeededSpec {
            path,
            origin: SpecOrigin::Existing,
        });
    }

    let template = config.template_path(repo_root);
    let origin = if template.is_file() {
        fs::copy(&template, &path).map_err(ScaffoldError::io(format!(
            "Failed to copy template {} to {}",
            template.display(),
            path.display()
        )))?;
        info!("Seeded {} from {}", path.display(), template.display());
        SpecOrigin::Template
    } else {
        fs::File::create(&path).map_err(ScaffoldError::io(format!(
            "Failed to create {}",
            path.display()
        )))?;
        warn!(
            "Template not found at {}; created empty {}",
            template.display(),
            path.display()
        );
        SpecOrigin::Empty
    };

    Ok(SeededSpec { path, origin })
}
