//! Pull request to Notion migration operation.

use std::io::Write;

use archivist::{
    ArchivistConfig, DatabaseId, IntegrationToken, MigrationError, MigrationOptions, Migrator,
    NotionClient, OctocrabGateway, PersonalAccessToken, RepositoryLocator,
};
use tracing::info;

use super::output::write_report;

/// Everything a run needs, resolved and validated from configuration.
#[derive(Debug)]
pub struct RunSettings {
    /// Source repository and API base.
    pub locator: RepositoryLocator,
    /// GitHub credential.
    pub github_token: PersonalAccessToken,
    /// Notion credential.
    pub notion_token: IntegrationToken,
    /// Database and dry-run mode.
    pub options: MigrationOptions,
}

impl RunSettings {
    /// Resolves settings in the order tokens, database, repository.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid setting.
    pub fn from_config(config: &ArchivistConfig) -> Result<Self, MigrationError> {
        let github_token = PersonalAccessToken::new(config.resolve_github_token()?)?;
        let notion_token = IntegrationToken::new(config.resolve_notion_token()?)?;
        let database = DatabaseId::new(config.require_database_id()?)?;
        let (owner, repo) = config.require_repository_info()?;
        let locator = RepositoryLocator::with_api_base(config.github_api_url(), owner, repo)?;

        Ok(Self {
            locator,
            github_token,
            notion_token,
            options: MigrationOptions {
                database,
                dry_run: config.is_dry_run(),
            },
        })
    }
}

/// Migrates every pull request of the configured repository and writes a
/// summary to `writer`.
///
/// # Errors
///
/// Returns [`MigrationError::MissingToken`], [`MigrationError::MissingDatabaseId`]
/// or [`MigrationError::Configuration`] when configuration is incomplete, and
/// the first API failure otherwise.
pub async fn run<W: Write>(config: &ArchivistConfig, writer: &mut W) -> Result<(), MigrationError> {
    let settings = RunSettings::from_config(config)?;
    let source = OctocrabGateway::for_token(&settings.github_token, &settings.locator)?;
    let store = NotionClient::new(settings.notion_token.clone(), config.notion_api_url())?;

    info!(
        owner = settings.locator.owner().as_str(),
        repo = settings.locator.repository().as_str(),
        dry_run = settings.options.dry_run,
        "starting migration"
    );

    let report = Migrator::new(&source, &store, &settings.locator)
        .run(&settings.options)
        .await?;

    write_report(writer, &settings.locator, &report)
}
