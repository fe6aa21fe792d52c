pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod naming;
pub mod repo;
pub mod report;
pub mod scaffold;
pub mod vcs;
pub mod workspace;

pub use config::Config;
pub use error::{ScaffoldError, VcsError};
pub use scaffold::{create_feature, create_feature_in};
