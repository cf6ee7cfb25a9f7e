//! Maps Octocrab failures onto [`MigrationError`].

use http::StatusCode;

use crate::error::{MigrationError, Service};

pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    if source.status_code == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    source.status_code == StatusCode::FORBIDDEN && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> MigrationError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let status = source.status_code;
        let message = &source.message;
        if is_rate_limit_error(source) {
            return MigrationError::RateLimitExceeded {
                service: Service::GitHub,
                message: format!("{operation} failed: {message}"),
            };
        }
        return if is_auth_failure(status) {
            MigrationError::Authentication {
                service: Service::GitHub,
                message: format!("{operation} failed: GitHub returned {status} {message}"),
            }
        } else {
            MigrationError::Api {
                service: Service::GitHub,
                message: format!("{operation} failed with status {status}: {message}"),
            }
        };
    }

    if is_network_error(error) {
        return MigrationError::Network {
            service: Service::GitHub,
            message: format!("{operation} failed: {error}"),
        };
    }

    MigrationError::Api {
        service: Service::GitHub,
        message: format!("{operation} failed: {error}"),
    }
}
