//! Runtime configuration.
//!
//! Defaults match the layout expected by the spec-driven workflow. Overrides
//! come from environment variables:
//! - `FEATURE_SCAFFOLD_SPECS_DIR` - Specs root directory name (default: `specs`)
//! - `FEATURE_SCAFFOLD_CONFIG_DIR` - Workflow-config directory name (default: `.specify`)
//! - `FEATURE_SCAFFOLD_NO_GIT` - Disable version control when set to a truthy value

use std::path::{Path, PathBuf};

pub const VCS_MARKER: &str = ".git";
pub const DEFAULT_CONFIG_DIR: &str = ".specify";
pub const DEFAULT_SPECS_DIR: &str = "specs";
pub const SPEC_FILE_NAME: &str = "spec.md";
pub const SESSION_VARIABLE: &str = "SPECIFY_FEATURE";

/// Largest branch name, in bytes, accepted by common hosting providers.
pub const MAX_BRANCH_BYTES: usize = 244;

/// Branches treated as a starting point rather than a feature branch.
pub const TRUNK_BRANCHES: [&str; 3] = ["main", "master", "develop"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory under the repository root holding one folder per feature.
    pub specs_dir: String,
    /// Workflow-config directory; doubles as a repository root marker.
    pub config_dir: String,
    pub max_branch_bytes: usize,
    /// When false, every version-control operation reports "unavailable".
    pub use_vcs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            specs_dir: DEFAULT_SPECS_DIR.to_string(),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            max_branch_bytes: MAX_BRANCH_BYTES,
            use_vcs: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty("FEATURE_SCAFFOLD_SPECS_DIR") {
            config.specs_dir = dir;
        }
        if let Some(dir) = non_empty("FEATURE_SCAFFOLD_CONFIG_DIR") {
            config.config_dir = dir;
        }
        if let Some(flag) = non_empty("FEATURE_SCAFFOLD_NO_GIT") {
            let flag = flag.trim().to_ascii_lowercase();
            config.use_vcs = flag == "0" || flag == "false";
        }
        config
    }

    /// Directory names whose presence marks a repository root.
    pub fn markers(&self) -> [&str; 2] {
        [VCS_MARKER, self.config_dir.as_str()]
    }

    pub fn specs_root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.specs_dir)
    }

    pub fn template_path(&self, repo_root: &Path) -> PathBuf {
        repo_root
            .join(&self.config_dir)
            .join("templates")
            .join("spec-template.md")
    }
}

pub fn is_trunk(branch: &str) -> bool {
    TRUNK_BRANCHES.contains(&branch)
}
