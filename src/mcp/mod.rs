//! MCP server exposing feature setup to orchestrating agents.

mod types;

use std::path::PathBuf;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};

use crate::config::Config;
use crate::error::ScaffoldError;
use crate::models::FeatureRequest;
use crate::scaffold;

#[derive(Clone)]
pub struct McpServer {
    config: Config,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    fn scaffold_err(e: ScaffoldError) -> McpError {
        match e {
            ScaffoldError::Io { .. } => McpError::internal_error(e.to_string(), None),
            _ => McpError::invalid_params(e.to_string(), None),
        }
    }

    fn start_dir(directory: Option<&str>) -> Result<PathBuf, McpError> {
        match directory {
            Some(dir) => {
                let path = PathBuf::from(dir);
                if !path.is_dir() {
                    return Err(McpError::invalid_params(
                        format!("Directory does not exist: {}", dir),
                        None,
                    ));
                }
                Ok(path)
            }
            None => std::env::current_dir()
                .map_err(|e| McpError::internal_error(e.to_string(), None)),
        }
    }

    fn run_create(&self, req: &CreateFeatureRequest) -> Result<CreateFeatureResponse, McpError> {
        let start = Self::start_dir(req.directory.as_deref())?;
        let workspace =
            scaffold::create_feature_in(&start, &FeatureRequest::from(req), &self.config)
                .map_err(Self::scaffold_err)?;

        tracing::info!(
            "Feature workspace ready: {} ({})",
            workspace.branch_name,
            workspace.action.as_str()
        );

        Ok(workspace.into())
    }

    // ============================================================
    // Test helpers - expose tool logic for testing
    // ============================================================

    pub fn test_create_feature(
        &self,
        req: CreateFeatureRequest,
    ) -> Result<CreateFeatureResponse, McpError> {
        self.run_create(&req)
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "Create (or resume) the workspace for a feature. Derives a short branch name from the description unless short_name is given, creates or reuses the git branch, and ensures specs/<branch>/spec.md exists. Safe to call again mid-feature: an existing branch folder is reused and spec.md is never overwritten. Returns the branch name, spec file path, and a session variable to set for later steps."
    )]
    async fn create_feature(
        &self,
        params: Parameters<CreateFeatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.run_create(&req)?;

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "feature-scaffold".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"feature-scaffold prepares the workspace for a new feature.

WORKFLOW:
1. Call create_feature with a one-sentence description of the feature
2. Set the returned session_variable in your session
3. Write the specification into the returned spec_file

NOTES:
- Starting from main/master/develop creates a new branch
- On any other branch, that branch is kept and its specs folder is used
- spec.md is seeded from .specify/templates/spec-template.md when present"#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(config: Config) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(config);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
