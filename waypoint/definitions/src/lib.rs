//! Waypoint API Definitions
//!
//! Operation tables for real-world REST APIs, built from the primitives in
//! `waypoint-define`. Each API lives in its own module.
//!
//! ## Available APIs
//!
//! - [`wistia`] - Wistia Data API (projects, sharings, medias, account, customizations, captions)
//!
//! ## Examples
//!
//! ```
//! use waypoint_definitions::wistia::define_wistia_registry;
//!
//! let registry = define_wistia_registry().unwrap();
//! assert_eq!(registry.len(), 27);
//! assert!(registry.contains("show_sharing"));
//! ```

pub mod wistia;

pub use wistia::define_wistia_registry;
