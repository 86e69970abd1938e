//! Declarative dispatch of named REST operations.
//!
//! A client declares its operations once, as a table of
//! `(name, verb, path template)` rows (see [`waypoint_define`]). The
//! [`Dispatcher`] then turns `invoke("show_sharing", ["abc123", 42])` into
//! `transport.get("projects/abc123/sharings/42", [])`.
//!
//! ## Features
//!
//! - **One generic entry point**: [`Dispatcher::invoke`] plus the [`invoke!`] macro
//! - **Typed path slots**: `{string}` / `{integer}` with structured errors
//! - **Pluggable transport**: anything implementing [`Transport`]
//! - **Bundled HTTP transport**: [`HttpTransport`] over `reqwest` with tracing spans
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use waypoint::{Dispatcher, HttpTransport, invoke};
//! use waypoint_define::{OperationEntry, OperationRegistry, RestMethod};
//!
//! let registry = OperationRegistry::from_entries(&[
//!     OperationEntry::new("list_projects", RestMethod::Get, "projects"),
//!     OperationEntry::new("show_sharing", RestMethod::Get, "projects/{string}/sharings/{integer}"),
//! ])?;
//! let transport = HttpTransport::new(url::Url::parse("https://api.example.com/v1")?)?;
//! let client = Dispatcher::new(registry, transport);
//!
//! let projects = invoke!(client, "list_projects", json!({"page": 1})).await?;
//! let sharing = invoke!(client, "show_sharing", "abc123", 42).await?;
//! ```

pub mod dispatcher;
pub mod error;
pub mod http;
pub mod invocation;
mod macros;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use error::{
    AuthError, ClientError, ConfigError, DispatchError, TransportError, ValidationError,
};
pub use http::{AuthMethod, HttpTransport, HttpTransportBuilder};
pub use invocation::{Invocation, ResolvedCall};
pub use transport::Transport;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}
