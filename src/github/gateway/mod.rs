//! Gateways for reading pull requests through Octocrab.
//!
//! The migration flow only talks to the [`PullRequestSource`] trait so tests
//! can substitute mocks, while [`OctocrabGateway`] performs real HTTP
//! requests.

mod client;
mod error_mapping;
mod pages;
mod pull_request;

pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::error::MigrationError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Comment, PullRequest, PullRequestState, Review};

/// Read-only access to a repository's pull requests and their discussion.
///
/// Every listing returns all pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// List pull requests in the given state.
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        state: PullRequestState,
    ) -> Result<Vec<PullRequest>, MigrationError>;

    /// List submitted reviews for a pull request.
    async fn list_reviews(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Review>, MigrationError>;

    /// List issue-style conversation comments for a pull request.
    async fn list_issue_comments(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Comment>, MigrationError>;

    /// List review comments attached to diff lines.
    async fn list_review_comments(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Comment>, MigrationError>;
}
