//! End-to-end feature setup: locate, name, reconcile, seed.

use std::path::Path;

use tracing::info;

use crate::config::{Config, SESSION_VARIABLE};
use crate::error::ScaffoldError;
use crate::models::{FeatureRequest, FeatureWorkspace, SessionVariable};
use crate::vcs::{self, VersionControl};
use crate::{naming, repo, workspace};

/// Set up the workspace for `request`, starting the repository search at `start`.
pub fn create_feature(
    start: &Path,
    request: &FeatureRequest,
    config: &Config,
    vcs: &dyn VersionControl,
) -> Result<FeatureWorkspace, ScaffoldError> {
    let description = request.description.trim();
    if description.is_empty() {
        return Err(ScaffoldError::EmptyDescription);
    }

    let location = repo::locate(start, config, vcs)?;
    info!("Repository root: {}", location.root.display());

    let (raw, candidate) = match request.short_name.as_deref().map(str::trim) {
        Some(short) if !short.is_empty() => (short, naming::sanitize(short)),
        _ => (description, naming::derive(description)),
    };
    if candidate.is_empty() {
        return Err(ScaffoldError::UnusableName {
            raw: raw.to_string(),
        });
    }

    let (candidate, truncation) = naming::clamp(&candidate, config.max_branch_bytes);

    let settled = workspace::reconcile(
        &candidate,
        &location.root,
        config,
        vcs,
        location.vcs_available,
    )?;
    let spec = workspace::seed_spec(&settled.feature_dir, &location.root, config)?;

    Ok(FeatureWorkspace {
        session: SessionVariable {
            name: SESSION_VARIABLE.to_string(),
            value: settled.branch_name.clone(),
        },
        branch_name: settled.branch_name,
        repo_root: location.root,
        feature_dir: settled.feature_dir,
        spec_file: spec.path,
        action: settled.action,
        spec_origin: spec.origin,
        truncation,
    })
}

/// [`create_feature`] with the version-control capability chosen by `config`.
pub fn create_feature_in(
    start: &Path,
    request: &FeatureRequest,
    config: &Config,
) -> Result<FeatureWorkspace, ScaffoldError> {
    let vcs = vcs::open(start, config);
    create_feature(start, request, config, vcs.as_ref())
}
