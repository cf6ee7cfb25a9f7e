//! Maps Notion HTTP failures onto [`MigrationError`].

use http::StatusCode;

use crate::error::{MigrationError, Service};

use super::model::ApiErrorBody;

pub(super) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> MigrationError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|error| match (error.code, error.message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (None, Some(message)) => Some(message),
            (Some(code), None) => Some(code),
            (None, None) => None,
        })
        .unwrap_or_else(|| "unknown error".to_owned());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MigrationError::Authentication {
            service: Service::Notion,
            message: format!("{operation} failed: Notion returned {status} {detail}"),
        },
        StatusCode::TOO_MANY_REQUESTS => MigrationError::RateLimitExceeded {
            service: Service::Notion,
            message: format!("{operation} failed: {detail}"),
        },
        _ => MigrationError::Api {
            service: Service::Notion,
            message: format!("{operation} failed with status {status}: {detail}"),
        },
    }
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> MigrationError {
    if error.is_decode() {
        return MigrationError::Api {
            service: Service::Notion,
            message: format!("{operation} response could not be decoded: {error}"),
        };
    }

    MigrationError::Network {
        service: Service::Notion,
        message: format!("{operation} failed: {error}"),
    }
}
