//! Version-control capability.
//!
//! The pipeline only ever talks to [`VersionControl`]; failures are values, not
//! panics, so callers can degrade to marker-based discovery and skip branch
//! operations.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::config::Config;
use crate::error::VcsError;

pub trait VersionControl {
    /// Top-level directory of the working tree.
    fn repository_root(&self) -> Result<PathBuf, VcsError>;

    /// Name of the checked-out branch.
    fn current_branch(&self) -> Result<String, VcsError>;

    /// Create `name` and switch to it.
    fn create_branch(&self, name: &str) -> Result<(), VcsError>;
}

/// The `git` command-line tool, run from a fixed working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, VcsError> {
        debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                // A missing working directory also surfaces as NotFound
                ErrorKind::NotFound if self.workdir.is_dir() => VcsError::Unavailable,
                _ => VcsError::Spawn(e),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(VcsError::Command {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl VersionControl for Git {
    fn repository_root(&self) -> Result<PathBuf, VcsError> {
        self.run(&["rev-parse", "--show-toplevel"]).map(PathBuf::from)
    }

    fn current_branch(&self) -> Result<String, VcsError> {
        let branch = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        // Detached HEAD reports the literal "HEAD"
        if branch.is_empty() || branch == "HEAD" {
            return Err(VcsError::Command {
                command: "git rev-parse --abbrev-ref HEAD".to_string(),
                stderr: "no branch is checked out".to_string(),
            });
        }
        Ok(branch)
    }

    fn create_branch(&self, name: &str) -> Result<(), VcsError> {
        self.run(&["checkout", "-b", name]).map(|_| ())
    }
}

/// Stand-in used when version control is disabled or absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVcs;

impl VersionControl for NoVcs {
    fn repository_root(&self) -> Result<PathBuf, VcsError> {
        Err(VcsError::Unavailable)
    }

    fn current_branch(&self) -> Result<String, VcsError> {
        Err(VcsError::Unavailable)
    }

    fn create_branch(&self, _name: &str) -> Result<(), VcsError> {
        Err(VcsError::Unavailable)
    }
}

/// Pick the capability for `workdir` according to `config`.
pub fn open(workdir: &Path, config: &Config) -> Box<dyn VersionControl> {
    if config.use_vcs {
        Box::new(Git::new(workdir))
    } else {
        Box::new(NoVcs)
    }
}
