//! Shared wiremock fixtures for CLI tests.

use archivist::ArchivistConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a complete configuration pointing at the given API bases.
pub fn config_for(github_api_url: &str, notion_api_url: &str) -> ArchivistConfig {
    ArchivistConfig {
        github_token: Some("ghp_test".to_owned()),
        notion_token: Some("secret_test".to_owned()),
        database_id: Some("db-1".to_owned()),
        owner: Some("octo".to_owned()),
        repo: Some("repo".to_owned()),
        github_api_url: Some(github_api_url.to_owned()),
        notion_api_url: Some(notion_api_url.to_owned()),
        ..Default::default()
    }
}

/// Mock GitHub and Notion servers; the Notion one already serves `db-1`.
pub struct ServerPair {
    /// Serves the GitHub REST API.
    pub github: MockServer,
    /// Serves the Notion REST API under `/v1`.
    pub notion: MockServer,
}

impl ServerPair {
    /// Starts both servers.
    pub async fn start() -> Self {
        let github = MockServer::start().await;
        let notion = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/databases/db-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "database",
                "id": "db-1",
                "title": [{ "plain_text": "RFCs" }]
            })))
            .with_priority(10)
            .mount(&notion)
            .await;
        Self { github, notion }
    }

    /// Configuration targeting these servers.
    pub fn config(&self) -> ArchivistConfig {
        config_for(&self.github.uri(), &self.notion_api_url())
    }

    /// Configuration produced by the layered loader from command-line flags
    /// alone, with an empty home directory.
    pub fn load_config(&self, extra_args: &[&str]) -> ArchivistConfig {
        use ortho_config::OrthoConfig;

        let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
        let home = temp_dir.path().to_string_lossy().to_string();
        let _guard = env_lock::lock_env([
            ("HOME", Some(home.as_str())),
            ("XDG_CONFIG_HOME", Some(home.as_str())),
        ]);

        let github_api_url = self.github.uri();
        let notion_api_url = self.notion_api_url();
        let mut args = vec![
            "archivist",
            "-g",
            "ghp_test",
            "-n",
            "secret_test",
            "-d",
            "db-1",
            "-o",
            "octo",
            "-r",
            "repo",
            "--github-api-url",
            github_api_url.as_str(),
            "--notion-api-url",
            notion_api_url.as_str(),
        ];
        args.extend_from_slice(extra_args);

        ArchivistConfig::load_from_iter(args).expect("config should load")
    }

    fn notion_api_url(&self) -> String {
        format!("{}/v1", self.notion.uri())
    }
}

/// Serves one open pull request (#7) with no reviews or comments and no
/// closed pull requests.
pub async fn mount_single_pull_request(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/pulls"))
        .and(query_param("state", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "number": 7,
            "title": "Adopt structured logging",
            "state": "open",
            "created_at": "2021-03-04T05:06:07Z",
            "closed_at": null,
            "merged_at": null,
            "user": { "login": "octocat" },
            "requested_reviewers": [{ "login": "hubot" }],
            "labels": [{ "name": "sre" }],
            "body": "Proposal body",
            "html_url": "https://github.com/octo/repo/pull/7"
        }])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/pulls"))
        .and(query_param("state", "closed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
    for endpoint in [
        "/repos/octo/repo/pulls/7/reviews",
        "/repos/octo/repo/pulls/7/comments",
        "/repos/octo/repo/issues/7/comments",
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }
}
