//! Output formatting for the command line.

use serde::Serialize;

use crate::models::FeatureWorkspace;

/// The record printed at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(rename = "BRANCH_NAME")]
    pub branch_name: String,
    #[serde(rename = "SPEC_FILE")]
    pub spec_file: String,
    #[serde(skip)]
    session_variable: String,
}

impl Report {
    pub fn new(workspace: &FeatureWorkspace) -> Self {
        Self {
            branch_name: workspace.branch_name.clone(),
            spec_file: workspace.spec_file.display().to_string(),
            session_variable: workspace.session.name.clone(),
        }
    }

    /// Single-line `{"BRANCH_NAME":…,"SPEC_FILE":…}` record.
    pub fn json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn plain(&self) -> String {
        format!(
            "BRANCH_NAME: {}\nSPEC_FILE: {}\n{} environment variable set to: {}",
            self.branch_name, self.spec_file, self.session_variable, self.branch_name
        )
    }
}
