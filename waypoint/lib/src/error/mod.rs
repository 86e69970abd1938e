//! Layered error types for the waypoint crate.
//!
//! - [`DispatchError`] - Failures of a single invocation (resolution or transport)
//! - [`TransportError`] - Top-level error of the bundled [`HttpTransport`](crate::HttpTransport)
//! - [`ClientError`] - HTTP client and network errors
//! - [`AuthError`] - Authentication and authorization errors
//! - [`ValidationError`] - Response parsing errors
//! - [`ConfigError`] - Transport configuration errors

mod auth_error;
mod client_error;
mod config_error;
mod dispatch_error;
mod transport_error;
mod validation_error;

pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use dispatch_error::DispatchError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;
