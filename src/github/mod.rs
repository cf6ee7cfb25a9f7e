//! GitHub pull request reading.
//!
//! This module wraps Octocrab to list a repository's pull requests together
//! with their reviews and both comment streams. Failures are mapped into
//! [`MigrationError`](crate::error::MigrationError) so callers never see
//! Octocrab internals.

pub mod gateway;
pub mod locator;
pub mod models;

pub use gateway::{OctocrabGateway, PullRequestSource};
pub use locator::{
    DEFAULT_GITHUB_API_URL, PersonalAccessToken, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};
pub use models::{Comment, PullRequest, PullRequestState, Review, ReviewState};

#[cfg(test)]
pub use gateway::MockPullRequestSource;
