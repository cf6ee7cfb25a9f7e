//! Octocrab implementation of [`PullRequestSource`].

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::error::MigrationError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiComment, ApiPullRequest, ApiReview, Comment, PullRequest, PullRequestState, Review,
};

use super::PullRequestSource;
use super::client::build_octocrab_client;
use super::pages::{PER_PAGE, fetch_all_pages};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository locator.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::InvalidUrl` when the API base cannot be used as
    /// a URI or `MigrationError::Configuration` when Octocrab rejects the setup.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, MigrationError> {
        let octocrab = build_octocrab_client(token, locator)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestSource for OctocrabGateway {
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        state: PullRequestState,
    ) -> Result<Vec<PullRequest>, MigrationError> {
        let query = [("state", state.as_str()), ("per_page", PER_PAGE)];
        let pulls: Vec<ApiPullRequest> =
            fetch_all_pages(&self.client, &locator.pulls_path(), &query, "list pulls").await?;
        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }

    async fn list_reviews(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Review>, MigrationError> {
        let query = [("per_page", PER_PAGE)];
        let reviews: Vec<ApiReview> = fetch_all_pages(
            &self.client,
            &locator.reviews_path(number),
            &query,
            "list reviews",
        )
        .await?;
        Ok(reviews.into_iter().map(Review::from).collect())
    }

    async fn list_issue_comments(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Comment>, MigrationError> {
        let query = [("per_page", PER_PAGE)];
        let comments: Vec<ApiComment> = fetch_all_pages(
            &self.client,
            &locator.issue_comments_path(number),
            &query,
            "issue comments",
        )
        .await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn list_review_comments(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Comment>, MigrationError> {
        let query = [("per_page", PER_PAGE)];
        let comments: Vec<ApiComment> = fetch_all_pages(
            &self.client,
            &locator.review_comments_path(number),
            &query,
            "review comments",
        )
        .await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}
