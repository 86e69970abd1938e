//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to API authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// None of the credential environment variables are set.
    #[error("Missing credential: none of {} is set", .env_vars.join(", "))]
    MissingCredential {
        /// The variables that were checked, in order.
        env_vars: Vec<String>,
    },

    /// Server rejected the authentication credentials.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// Insufficient permissions for the requested path.
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The request that was denied (`VERB path`).
        operation: String,
    },
}
