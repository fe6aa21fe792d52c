//! Request and response types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{FeatureRequest, FeatureWorkspace, ReconcileAction};

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateFeatureRequest {
    #[schemars(
        description = "Free-text description of the feature, e.g. 'Add OAuth2 login for the admin API'"
    )]
    pub description: String,
    #[schemars(
        description = "Optional explicit short name for the branch and spec folder. Overrides the name derived from the description."
    )]
    #[serde(default)]
    pub short_name: Option<String>,
    #[schemars(
        description = "Directory to start the repository search from. Defaults to the server's working directory."
    )]
    #[serde(default)]
    pub directory: Option<String>,
}

impl From<&CreateFeatureRequest> for FeatureRequest {
    fn from(req: &CreateFeatureRequest) -> Self {
        Self {
            description: req.description.clone(),
            short_name: req.short_name.clone(),
        }
    }
}

// ============================================================
// Response Types
// ============================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SessionVariableInfo {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateFeatureResponse {
    pub branch_name: String,
    pub spec_file: String,
    pub feature_dir: String,
    /// One of `reused`, `adopted_branch`, `created`.
    pub action: String,
    /// Whether a new branch was created and checked out.
    pub branch_created: bool,
    /// One of `existing`, `template`, `empty`.
    pub spec_origin: String,
    /// Original name when it had to be shortened to fit the branch length limit.
    pub truncated_from: Option<String>,
    /// Set this in the session so later workflow steps find the feature.
    pub session_variable: SessionVariableInfo,
}

impl From<FeatureWorkspace> for CreateFeatureResponse {
    fn from(ws: FeatureWorkspace) -> Self {
        Self {
            action: ws.action.as_str().to_string(),
            branch_created: matches!(
                ws.action,
                ReconcileAction::Created {
                    branch_created: true
                }
            ),
            spec_origin: ws.spec_origin.as_str().to_string(),
            truncated_from: ws.truncation.map(|t| t.original),
            session_variable: SessionVariableInfo {
                name: ws.session.name,
                value: ws.session.value,
            },
            spec_file: ws.spec_file.display().to_string(),
            feature_dir: ws.feature_dir.display().to_string(),
            branch_name: ws.branch_name,
        }
    }
}
