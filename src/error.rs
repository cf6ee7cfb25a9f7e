//! Error type shared by the source gateway, the Notion client, and the CLI.

use thiserror::Error;

/// Remote service a credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// The GitHub REST API that pull requests are read from.
    GitHub,
    /// The Notion REST API that pages are written to.
    Notion,
}

impl Service {
    /// Human-readable service name used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Notion => "Notion",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Errors surfaced while configuring or running a migration.
///
/// Every variant is fatal to the run; the categories only shape the message
/// shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MigrationError {
    /// No token was configured for the named service.
    #[error("{service} token is required")]
    MissingToken {
        /// Service whose token is missing.
        service: Service,
    },

    /// No target database identifier was configured.
    #[error("Notion database ID is required (use --database-id or -d)")]
    MissingDatabaseId,

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A base URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// Repository owner or name was blank.
    #[error("repository owner and name must not be empty")]
    MissingPathSegments,

    /// A token was rejected by the remote service.
    #[error("{service} rejected the token: {message}")]
    Authentication {
        /// Service that rejected the request.
        service: Service,
        /// Error message returned with the 401/403 response.
        message: String,
    },

    /// The remote service refused the request because of rate limiting.
    #[error("{service} API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Service that throttled the request.
        service: Service,
        /// Error message returned by the service.
        message: String,
    },

    /// The remote service returned a non-authentication failure, or its
    /// response could not be decoded.
    #[error("{service} API error: {message}")]
    Api {
        /// Service that failed.
        service: Service,
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling a remote service.
    #[error("network error talking to {service}: {message}")]
    Network {
        /// Service that could not be reached.
        service: Service,
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
