//! Convenient re-exports for declaring operation tables.
//!
//! ```
//! use waypoint_define::prelude::*;
//!
//! const OPERATIONS: &[OperationEntry] = &[
//!     OperationEntry::new("list_medias", RestMethod::Get, "medias"),
//!     OperationEntry::new("show_media", RestMethod::Get, "medias/{string}"),
//! ];
//!
//! let registry = OperationRegistry::from_entries(OPERATIONS).unwrap();
//! assert_eq!(registry.len(), 2);
//! ```

pub use crate::method::RestMethod;
pub use crate::registry::{OperationDescriptor, OperationEntry, OperationRegistry, RegistryError};
pub use crate::template::{PathTemplate, PlaceholderKind};
