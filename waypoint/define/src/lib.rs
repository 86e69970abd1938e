//! Waypoint Definition Library
//!
//! Types for declaring a REST API as a table of named operations, each a
//! (verb, path template) pair. The `waypoint` crate dispatches invocations
//! against these tables.
//!
//! ## Core Types
//!
//! - [`RestMethod`] - The recognized verbs (GET, POST, PUT, DELETE)
//! - [`PathTemplate`] - A path with typed `{string}` / `{integer}` slots
//! - [`PlaceholderKind`] - The type of a single slot
//! - [`OperationEntry`] - One row of a static operation table
//! - [`OperationDescriptor`] - The validated (verb, template) pair
//! - [`OperationRegistry`] - Immutable name → descriptor lookup table
//! - [`OperationName`] - A validated operation identifier
//!
//! ## Examples
//!
//! ```
//! use serde_json::json;
//! use waypoint_define::{OperationEntry, OperationRegistry, RestMethod};
//!
//! let registry = OperationRegistry::from_entries(&[
//!     OperationEntry::new("show_sharing", RestMethod::Get, "projects/{string}/sharings/{integer}"),
//! ])
//! .unwrap();
//!
//! let descriptor = registry.lookup("show_sharing").unwrap();
//! let path = descriptor.path.render(&[json!("abc123"), json!(42)]).unwrap();
//! assert_eq!(path, "projects/abc123/sharings/42");
//! ```

pub mod method;
pub mod name;
pub mod prelude;
pub mod registry;
pub mod template;

pub use method::RestMethod;
pub use name::{OperationName, OperationNameError};
pub use registry::{OperationDescriptor, OperationEntry, OperationRegistry, RegistryError};
pub use template::{PathTemplate, PlaceholderKind, RenderError, Segment, TemplateError};
