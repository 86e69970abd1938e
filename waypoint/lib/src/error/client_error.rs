//! Failures of an [`HttpTransport`](crate::HttpTransport) request.

use thiserror::Error;

/// Why a dispatched request did not produce a successful response.
///
/// `send` failures are sorted by the transport: timeouts and refused
/// connections get their own variants, anything else stays a raw
/// `reqwest` error.
#[derive(Debug, Error)]
pub enum ClientError {
    /// `reqwest` failed for a reason other than a timeout or connect error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status other than 401/403.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// Response status.
        status: u16,
        /// Response body, or the status reason when the body is unreadable.
        message: String,
    },

    /// No response within the transport's configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The configured timeout.
        duration_ms: u64,
    },

    /// The API host could not be reached.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Arguments forwarded past the path slots cannot be encoded for the
    /// verb, e.g. a non-object GET argument or a nested query value.
    #[error("Invalid request parameters: {message}")]
    InvalidParams {
        /// Which argument or key was rejected.
        message: String,
    },
}

impl ClientError {
    /// Whether resending the same dispatch could succeed.
    ///
    /// Unreachable hosts, timeouts, 429 and 5xx are transient; a bad
    /// argument or a 4xx will fail again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidParams { .. } => false,
        }
    }

    /// The response status, when the API answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}
