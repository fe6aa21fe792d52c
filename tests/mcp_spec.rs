//! MCP server integration tests.

mod common;

use std::fs;

use common::write_template;
use feature_scaffold::mcp::{CreateFeatureRequest, McpServer};
use feature_scaffold::Config;
use rmcp::model::ErrorCode;
use tempfile::TempDir;

/// Helper to create a server with version control disabled and a marked repo root.
fn setup() -> (McpServer, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(dir.path().join(".specify")).expect("Failed to create marker");
    let config = Config {
        use_vcs: false,
        ..Config::default()
    };
    (McpServer::new(config), dir)
}

fn request(dir: &TempDir, description: &str) -> CreateFeatureRequest {
    CreateFeatureRequest {
        description: description.to_string(),
        short_name: None,
        directory: Some(dir.path().display().to_string()),
    }
}

mod create_feature {
    use super::*;

    #[tokio::test]
    async fn returns_branch_and_spec_file() {
        let (server, dir) = setup();

        let response = server
            .test_create_feature(request(&dir, "Add rate limiting to the public API"))
            .expect("Tool failed");

        assert_eq!(response.branch_name, "rate-limiting-public-api");
        assert!(response.spec_file.ends_with("specs/rate-limiting-public-api/spec.md"));
        assert_eq!(response.action, "created");
        assert!(!response.branch_created);
        assert_eq!(response.spec_origin, "empty");
        assert!(response.truncated_from.is_none());
        assert_eq!(response.session_variable.name, "SPECIFY_FEATURE");
        assert_eq!(response.session_variable.value, "rate-limiting-public-api");
    }

    #[tokio::test]
    async fn seeds_from_template() {
        let (server, dir) = setup();
        write_template(dir.path(), b"# Template\n");

        let response = server
            .test_create_feature(request(&dir, "Dark mode toggle"))
            .expect("Tool failed");

        assert_eq!(response.spec_origin, "template");
        assert_eq!(fs::read_to_string(&response.spec_file).unwrap(), "# Template\n");
    }

    #[tokio::test]
    async fn uses_short_name_override() {
        let (server, dir) = setup();
        let mut req = request(&dir, "Dark mode toggle");
        req.short_name = Some("Theme Switch".to_string());

        let response = server.test_create_feature(req).expect("Tool failed");

        assert_eq!(response.branch_name, "theme-switch");
    }

    #[tokio::test]
    async fn second_call_keeps_existing_spec() {
        let (server, dir) = setup();

        let first = server
            .test_create_feature(request(&dir, "Dark mode toggle"))
            .expect("Tool failed");
        fs::write(&first.spec_file, "draft").unwrap();

        let second = server
            .test_create_feature(request(&dir, "Dark mode toggle"))
            .expect("Tool failed");

        assert_eq!(second.spec_file, first.spec_file);
        assert_eq!(second.spec_origin, "existing");
        assert_eq!(fs::read_to_string(&second.spec_file).unwrap(), "draft");
    }

    #[tokio::test]
    async fn returns_error_for_empty_description() {
        let (server, dir) = setup();

        let result = server.test_create_feature(request(&dir, "  "));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_a_missing_directory() {
        let (server, dir) = setup();
        let mut req = request(&dir, "Dark mode toggle");
        req.directory = Some(dir.path().join("nowhere").display().to_string());

        let err = server.test_create_feature(req).expect_err("Tool should fail");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(!dir.path().join("specs").exists());
    }

    #[tokio::test]
    async fn rejects_a_file_as_directory() {
        let (server, dir) = setup();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "not a directory").unwrap();
        let mut req = request(&dir, "Dark mode toggle");
        req.directory = Some(file.display().to_string());

        let err = server.test_create_feature(req).expect_err("Tool should fail");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
