use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while setting up a feature workspace.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Feature description must not be empty")]
    EmptyDescription,

    #[error("Could not determine repository root from {}: no .git or workflow-config directory found", start.display())]
    RepositoryRootNotFound { start: PathBuf },

    #[error("Could not derive a usable branch name from '{raw}'")]
    UnusableName { raw: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }
}

/// Version-control failures. Always recovered from at the point of use.
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("version control is unavailable")]
    Unavailable,

    #[error("`{command}` failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("failed to run git: {0}")]
    Spawn(#[from] io::Error),
}
