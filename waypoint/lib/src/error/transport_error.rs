//! Top-level error for the bundled HTTP transport.

use super::{AuthError, ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Error type of [`HttpTransport`](crate::HttpTransport).
///
/// Aggregates every failure category so a dispatcher built over the HTTP
/// transport has a single `DispatchError<TransportError>` to match on.
///
/// ## Examples
///
/// ```rust,ignore
/// use waypoint::{DispatchError, TransportError};
///
/// fn handle_error(err: DispatchError<TransportError>) {
///     match err {
///         DispatchError::Transport(TransportError::Client(e)) => eprintln!("Network error: {e}"),
///         DispatchError::Transport(TransportError::Auth(e)) => eprintln!("Auth failed: {e}"),
///         DispatchError::Transport(e) => eprintln!("Transport error: {e}"),
///         other => eprintln!("Invocation error: {other}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP client errors (network, timeout, status).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response parsing errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Transport configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
