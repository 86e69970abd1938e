//! Reference HTTP transport.
//!
//! [`HttpTransport`] is a [`Transport`](crate::Transport) built on `reqwest`
//! with connection pooling, per-request authentication and tracing spans.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use waypoint::http::{AuthMethod, HttpTransport};
//! use url::Url;
//!
//! let transport = HttpTransport::builder(Url::parse("https://api.example.com/v1")?)
//!     .auth(AuthMethod::BearerToken, "sk-xxx")
//!     .build()?;
//! ```

mod auth;
mod executor;
mod params;

pub use auth::{AuthMethod, credential_from_env};
pub use executor::{HttpTransport, HttpTransportBuilder};
