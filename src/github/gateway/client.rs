//! Authenticated Octocrab setup for one repository's API host.

use http::Uri;
use octocrab::Octocrab;

use crate::error::MigrationError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

/// Creates an Octocrab instance that sends `token` to the locator's API host.
///
/// The locator's base is already a valid URL; the conversion to `http::Uri`
/// can still reject it (for example non-ASCII hosts), which surfaces as
/// `MigrationError::InvalidUrl`. Builder failures are configuration errors.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    locator: &RepositoryLocator,
) -> Result<Octocrab, MigrationError> {
    let api_host = locator.api_base().as_str();
    let base_uri = Uri::try_from(api_host).map_err(|error| {
        MigrationError::InvalidUrl(format!("{api_host} is not a usable GitHub API base: {error}"))
    })?;

    Octocrab::builder()
        .personal_token(token.value())
        .base_uri(base_uri)
        .map_err(|error| configuration_error(&error))?
        .build()
        .map_err(|error| configuration_error(&error))
}

fn configuration_error(error: &octocrab::Error) -> MigrationError {
    MigrationError::Configuration {
        message: format!("failed to configure GitHub client: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::build_octocrab_client;
    use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

    #[rstest]
    #[case::public("https://api.github.com")]
    #[case::enterprise("https://ghe.example.com/api/v3")]
    #[tokio::test]
    async fn builds_client_for_api_host(#[case] api_base: &str) {
        let locator = RepositoryLocator::with_api_base(api_base, "octo", "repo")
            .expect("locator should build");
        let token = PersonalAccessToken::new("ghp_example").expect("token should be valid");

        assert!(
            build_octocrab_client(&token, &locator).is_ok(),
            "expected a client for {api_base}"
        );
    }
}
