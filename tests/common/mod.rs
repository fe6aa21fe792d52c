//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use feature_scaffold::vcs::VersionControl;
use feature_scaffold::VcsError;

/// In-memory stand-in for git. Creating a branch also checks it out.
pub struct FakeVcs {
    root: Option<PathBuf>,
    branch: RefCell<Option<String>>,
    fail_create: bool,
    created: RefCell<Vec<String>>,
}

impl FakeVcs {
    pub fn on_branch(root: &Path, branch: &str) -> Self {
        Self {
            root: Some(root.to_path_buf()),
            branch: RefCell::new(Some(branch.to_string())),
            fail_create: false,
            created: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting_new_branches(root: &Path, branch: &str) -> Self {
        Self {
            fail_create: true,
            ..Self::on_branch(root, branch)
        }
    }

    pub fn current(&self) -> Option<String> {
        self.branch.borrow().clone()
    }

    pub fn created(&self) -> Vec<String> {
        self.created.borrow().clone()
    }
}

impl VersionControl for FakeVcs {
    fn repository_root(&self) -> Result<PathBuf, VcsError> {
        self.root.clone().ok_or(VcsError::Unavailable)
    }

    fn current_branch(&self) -> Result<String, VcsError> {
        self.branch.borrow().clone().ok_or(VcsError::Command {
            command: "git rev-parse --abbrev-ref HEAD".to_string(),
            stderr: "no branch".to_string(),
        })
    }

    fn create_branch(&self, name: &str) -> Result<(), VcsError> {
        if self.fail_create {
            return Err(VcsError::Command {
                command: format!("git checkout -b {}", name),
                stderr: format!("fatal: a branch named '{}' already exists", name),
            });
        }
        self.created.borrow_mut().push(name.to_string());
        *self.branch.borrow_mut() = Some(name.to_string());
        Ok(())
    }
}

/// Write the workflow spec template under `root`.
pub fn write_template(root: &Path, content: &[u8]) -> PathBuf {
    let dir = root.join(".specify").join("templates");
    fs::create_dir_all(&dir).expect("Failed to create template dir");
    let path = dir.join("spec-template.md");
    fs::write(&path, content).expect("Failed to write template");
    path
}

/// Names of the folders under `<root>/specs`, sorted.
pub fn spec_folders(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root.join("specs")) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
