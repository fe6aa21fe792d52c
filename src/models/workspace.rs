use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{SessionVariable, Truncation};

/// How the branch and feature directory were settled.
///
/// - `Reused`: The current branch already had a feature directory; nothing was created.
/// - `AdoptedBranch`: The current (non-trunk) branch was kept; only its directory was created.
/// - `Created`: A fresh name was used. `branch_created` is false when branch creation
///   failed or version control was unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReconcileAction {
    Reused,
    AdoptedBranch,
    Created { branch_created: bool },
}

impl ReconcileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reused => "reused",
            Self::AdoptedBranch => "adopted_branch",
            Self::Created { .. } => "created",
        }
    }
}

/// Where the feature's `spec.md` came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecOrigin {
    /// Already present; left untouched.
    Existing,
    /// Copied byte-for-byte from the workflow template.
    Template,
    /// No template available; created empty.
    Empty,
}

impl SpecOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Existing => "existing",
            Self::Template => "template",
            Self::Empty => "empty",
        }
    }
}

/// Outcome of one scaffolding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWorkspace {
    pub branch_name: String,
    pub repo_root: PathBuf,
    pub feature_dir: PathBuf,
    pub spec_file: PathBuf,
    pub action: ReconcileAction,
    pub spec_origin: SpecOrigin,
    /// Present when the candidate name was cut to fit the byte cap.
    pub truncation: Option<Truncation>,
    pub session: SessionVariable,
}
