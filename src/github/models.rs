//! Pull request, review, and comment models read from the GitHub API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Pull request state as reported by GitHub, also used as a listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    /// The pull request is still open.
    Open,
    /// The pull request was closed, with or without a merge.
    Closed,
}

impl PullRequestState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Pull request metadata needed to build a Notion page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title; empty when GitHub omits it.
    pub title: String,
    /// Open or closed.
    pub state: PullRequestState,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Merge timestamp, if merged.
    pub merged_at: Option<DateTime<Utc>>,
    /// Author login if present.
    pub author: Option<String>,
    /// Logins of reviewers whose review is still requested.
    pub requested_reviewers: Vec<String>,
    /// Label names in the order GitHub returns them.
    pub labels: Vec<String>,
    /// Markdown description.
    pub body: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
}

/// State of a submitted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
    /// The reviewer approved the change.
    Approved,
    /// The reviewer asked for changes.
    ChangesRequested,
    /// The reviewer left comments without a verdict.
    Commented,
    /// The review was dismissed.
    Dismissed,
    /// The review has not been submitted yet.
    Pending,
    /// A state this tool does not know, preserved verbatim.
    Other(String),
}

impl ReviewState {
    /// Parses the upper-case state string GitHub returns.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            "COMMENTED" => Self::Commented,
            "DISMISSED" => Self::Dismissed,
            "PENDING" => Self::Pending,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns true for an approving review.
    #[must_use]
    pub const fn is_approval(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// A review submitted on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Reviewer login, absent for deleted accounts.
    pub reviewer: Option<String>,
    /// Review verdict.
    pub state: ReviewState,
}

/// A comment from either the issue conversation or a diff line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Author login if present.
    pub author: Option<String>,
    /// Markdown body; empty when GitHub omits it.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// HTML URL linking back to the comment.
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) state: PullRequestState,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) merged_at: Option<DateTime<Utc>>,
    pub(crate) user: Option<ApiUser>,
    #[serde(default)]
    pub(crate) requested_reviewers: Vec<ApiUser>,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
    pub(crate) body: Option<String>,
    pub(crate) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) user: Option<ApiUser>,
    pub(crate) state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiComment {
    pub(crate) user: Option<ApiUser>,
    pub(crate) body: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: Option<String>,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title.unwrap_or_default(),
            state: value.state,
            created_at: value.created_at,
            merged_at: value.merged_at,
            author: value.user.and_then(|user| user.login),
            requested_reviewers: value
                .requested_reviewers
                .into_iter()
                .filter_map(|user| user.login)
                .collect(),
            labels: value
                .labels
                .into_iter()
                .filter_map(|label| label.name)
                .collect(),
            body: value.body,
            html_url: value.html_url,
        }
    }
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            reviewer: value.user.and_then(|user| user.login),
            state: ReviewState::parse(&value.state),
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            author: value.user.and_then(|user| user.login),
            body: value.body.unwrap_or_default(),
            created_at: value.created_at,
            html_url: value.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{ApiPullRequest, PullRequest, PullRequestState, ReviewState};

    #[rstest]
    fn api_pull_request_flattens_users_and_labels() {
        let value = json!({
            "number": 7,
            "title": "Add search facets",
            "state": "closed",
            "created_at": "2021-03-04T05:06:07Z",
            "closed_at": "2021-03-05T00:00:00Z",
            "merged_at": null,
            "user": { "login": "octocat" },
            "requested_reviewers": [{ "login": "alice" }, { "login": null }],
            "labels": [{ "name": "search" }, { "name": "sre" }],
            "body": null,
            "html_url": "https://github.com/octo/repo/pull/7"
        });

        let api: ApiPullRequest =
            serde_json::from_value(value).expect("ApiPullRequest should deserialise");
        let pr = PullRequest::from(api);

        assert_eq!(pr.number, 7);
        assert_eq!(pr.state, PullRequestState::Closed);
        assert!(pr.merged_at.is_none(), "merged_at was null");
        assert_eq!(pr.author.as_deref(), Some("octocat"));
        assert_eq!(pr.requested_reviewers, vec!["alice".to_owned()]);
        assert_eq!(pr.labels, vec!["search".to_owned(), "sre".to_owned()]);
        assert!(pr.body.is_none());
    }

    #[rstest]
    fn api_pull_request_tolerates_missing_collections() {
        let value = json!({
            "number": 1,
            "title": null,
            "state": "open",
            "created_at": "2021-03-04T05:06:07Z",
            "closed_at": null,
            "merged_at": null,
            "user": null,
            "body": "text",
            "html_url": null
        });

        let api: ApiPullRequest =
            serde_json::from_value(value).expect("ApiPullRequest should deserialise");
        let pr = PullRequest::from(api);

        assert_eq!(pr.title, "");
        assert!(pr.requested_reviewers.is_empty());
        assert!(pr.labels.is_empty());
    }

    #[rstest]
    #[case("APPROVED", ReviewState::Approved)]
    #[case("CHANGES_REQUESTED", ReviewState::ChangesRequested)]
    #[case("COMMENTED", ReviewState::Commented)]
    #[case("DISMISSED", ReviewState::Dismissed)]
    #[case("PENDING", ReviewState::Pending)]
    #[case("SOMETHING_NEW", ReviewState::Other("SOMETHING_NEW".to_owned()))]
    fn review_state_parses_github_values(#[case] raw: &str, #[case] expected: ReviewState) {
        assert_eq!(ReviewState::parse(raw), expected);
    }
}
