//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.archivist.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ARCHIVIST_*`, or legacy `GITHUB_TOKEN` /
//!    `NOTION_TOKEN` for the tokens
//! 4. **Command-line arguments** – `--github-token`/`-g`, `--owner`/`-o`, …
//!
//! # Configuration File
//!
//! ```toml
//! github_token = "ghp_example"
//! notion_token = "secret_example"
//! database_id = "0123456789abcdef0123456789abcdef"
//! owner = "octocat"
//! repo = "hello-world"
//! dry_run = false
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::{MigrationError, Service};
use crate::github::DEFAULT_GITHUB_API_URL;
use crate::notion::DEFAULT_NOTION_API_URL;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `ARCHIVIST_GITHUB_TOKEN`, `GITHUB_TOKEN`, or `--github-token`
/// - `ARCHIVIST_NOTION_TOKEN`, `NOTION_TOKEN`, or `--notion-token`
/// - `ARCHIVIST_DATABASE_ID` or `--database-id`
/// - `ARCHIVIST_OWNER` or `--owner`
/// - `ARCHIVIST_REPO` or `--repo`
///
/// # Example
///
/// ```no_run
/// use archivist::ArchivistConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ArchivistConfig::load().expect("failed to load configuration");
/// let (owner, repo) = config.require_repository_info().expect("repository required");
/// let token = config.resolve_github_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ARCHIVIST",
    discovery(
        dotfile_name = ".archivist.toml",
        config_file_name = "archivist.toml",
        app_name = "archivist"
    )
)]
pub struct ArchivistConfig {
    /// Personal access token for the GitHub API.
    ///
    /// Can be provided via:
    /// - CLI: `--github-token <TOKEN>` or `-g <TOKEN>`
    /// - Environment: `ARCHIVIST_GITHUB_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `github_token = "..."`
    #[ortho_config(cli_short = 'g')]
    pub github_token: Option<String>,

    /// Integration token for the Notion API.
    ///
    /// Can be provided via:
    /// - CLI: `--notion-token <TOKEN>` or `-n <TOKEN>`
    /// - Environment: `ARCHIVIST_NOTION_TOKEN` or `NOTION_TOKEN` (legacy)
    /// - Config file: `notion_token = "..."`
    #[ortho_config(cli_short = 'n')]
    pub notion_token: Option<String>,

    /// Notion database that receives one page per pull request.
    ///
    /// Can be provided via:
    /// - CLI: `--database-id <ID>` or `-d <ID>`
    /// - Environment: `ARCHIVIST_DATABASE_ID`
    /// - Config file: `database_id = "..."`
    #[ortho_config(cli_short = 'd')]
    pub database_id: Option<String>,

    /// Repository owner or organisation (e.g., "octocat").
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `ARCHIVIST_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `ARCHIVIST_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Prepares pages without creating them. Unset means dry-run.
    ///
    /// Can be provided via:
    /// - Config file: `dry_run = false`
    ///
    /// Not a CLI flag: a boolean switch always contributes a value to the
    /// CLI layer, which would override the file and the default.
    #[ortho_config(skip_cli)]
    pub dry_run: Option<bool>,

    /// Creates pages, overriding `dry_run`.
    ///
    /// Can be provided via:
    /// - CLI: `--write-pages` / `-w`
    ///
    /// The CLI layer always supplies this switch, so a config file value is
    /// overridden; use `dry_run = false` in the file instead. `ortho_config`
    /// does not load boolean values from the environment.
    #[ortho_config(cli_short = 'w')]
    pub write_pages: bool,

    /// GitHub API base, for GitHub Enterprise or test servers.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub github_api_url: Option<String>,

    /// Notion API base, for test servers.
    ///
    /// Defaults to `https://api.notion.com/v1`.
    #[ortho_config()]
    pub notion_api_url: Option<String>,
}

fn configured_or_env(value: Option<&str>, legacy_var: &str) -> Option<String> {
    value
        .map(ToOwned::to_owned)
        .or_else(|| env::var(legacy_var).ok())
        .filter(|token| !token.trim().is_empty())
}

impl ArchivistConfig {
    /// Resolves the GitHub token, falling back to `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::MissingToken`] when no source provides a
    /// value.
    pub fn resolve_github_token(&self) -> Result<String, MigrationError> {
        configured_or_env(self.github_token.as_deref(), "GITHUB_TOKEN").ok_or(
            MigrationError::MissingToken {
                service: Service::GitHub,
            },
        )
    }

    /// Resolves the Notion token, falling back to `NOTION_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::MissingToken`] when no source provides a
    /// value.
    pub fn resolve_notion_token(&self) -> Result<String, MigrationError> {
        configured_or_env(self.notion_token.as_deref(), "NOTION_TOKEN").ok_or(
            MigrationError::MissingToken {
                service: Service::Notion,
            },
        )
    }

    /// Returns the target database identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::MissingDatabaseId`] when none is configured.
    pub fn require_database_id(&self) -> Result<&str, MigrationError> {
        self.database_id
            .as_deref()
            .ok_or(MigrationError::MissingDatabaseId)
    }

    /// Returns owner and repo if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::Configuration`] when owner or repo is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), MigrationError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(MigrationError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(MigrationError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Returns true unless writes were explicitly enabled.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        !self.write_pages && self.dry_run.unwrap_or(true)
    }

    /// GitHub API base URL.
    #[must_use]
    pub fn github_api_url(&self) -> &str {
        self.github_api_url
            .as_deref()
            .unwrap_or(DEFAULT_GITHUB_API_URL)
    }

    /// Notion API base URL.
    #[must_use]
    pub fn notion_api_url(&self) -> &str {
        self.notion_api_url
            .as_deref()
            .unwrap_or(DEFAULT_NOTION_API_URL)
    }
}

#[cfg(test)]
mod tests;
