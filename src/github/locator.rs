//! Repository identity wrappers and API path construction.

use url::Url;

use crate::error::{MigrationError, Service};

/// Public GitHub REST API base.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, MigrationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MigrationError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, MigrationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MigrationError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, MigrationError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MigrationError::MissingToken {
                service: Service::GitHub,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Repository identity paired with the API base it is served from.
///
/// # Example
///
/// ```
/// use archivist::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "repo")
///     .expect("should build repository locator");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a repository hosted on `github.com`.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::MissingPathSegments` when owner or repo is
    /// empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, MigrationError> {
        Self::with_api_base(DEFAULT_GITHUB_API_URL, owner, repo)
    }

    /// Creates a locator against an explicit API base, such as a GitHub
    /// Enterprise `https://ghe.example.com/api/v3` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::InvalidUrl` when the base cannot be parsed
    /// and `MigrationError::MissingPathSegments` when owner or repo is empty.
    pub fn with_api_base(api_base: &str, owner: &str, repo: &str) -> Result<Self, MigrationError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let parsed_base =
            Url::parse(api_base).map_err(|error| MigrationError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base: parsed_base,
            owner: validated_owner,
            repository,
        })
    }

    /// API base URL for the repository host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    fn repo_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repo_path())
    }

    pub(crate) fn reviews_path(&self, number: u64) -> String {
        format!("{}/pulls/{number}/reviews", self.repo_path())
    }

    pub(crate) fn review_comments_path(&self, number: u64) -> String {
        format!("{}/pulls/{number}/comments", self.repo_path())
    }

    pub(crate) fn issue_comments_path(&self, number: u64) -> String {
        format!("{}/issues/{number}/comments", self.repo_path())
    }
}
