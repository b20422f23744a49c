//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the transport level, before any
/// response status was received.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error returned when a card could not be delivered.
///
/// Exactly one request is attempted per delivery, so this always
/// describes that single attempt.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport-level failure (connection, timeout, invalid URL).
    #[error("Error sending card: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Error sending card: {}", status_text(.status))]
    NonSuccessStatus {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body (if valid UTF-8)
        body: Option<String>,
    },

    /// The card payload could not be serialized.
    #[error("Failed to serialize card payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DeliveryError {
    /// Returns true if the failure was a request timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(HttpError::Timeout))
    }

    /// Returns the response status, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::NonSuccessStatus { status, .. } => Some(*status),
            Self::Http(_) | Self::Serialize(_) => None,
        }
    }
}

/// Renders a status as its reason phrase, falling back to the numeric code.
fn status_text(status: &http::StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_u16().to_string(), ToString::to_string)
}
