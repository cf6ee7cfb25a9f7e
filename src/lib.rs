//! Archivist library crate for migrating GitHub pull requests into Notion.
//!
//! The library wraps Octocrab to list a repository's pull requests with their
//! reviews and comments, maps each one onto a row of a Notion database, and
//! creates the pages over the Notion REST API. Failures surface as
//! [`MigrationError`] values that the CLI displays verbatim.

pub mod config;
pub mod error;
pub mod github;
pub mod mapping;
pub mod migration;
pub mod notion;
pub mod telemetry;

pub use config::ArchivistConfig;
pub use error::{MigrationError, Service};
pub use github::{
    Comment, OctocrabGateway, PersonalAccessToken, PullRequest, PullRequestSource,
    PullRequestState, RepositoryLocator, Review, ReviewState,
};
pub use migration::{MigrationOptions, MigrationReport, Migrator, PreparedPage};
pub use notion::{
    CreatedPage, DatabaseId, DatabaseSummary, IntegrationToken, NotionClient, PageStore,
};
