//! The operation registry: an immutable name → (verb, path template) table.
//!
//! Registries are built once from a static table of [`OperationEntry`]
//! values, or from YAML, and validated as they are built. After that they
//! are read-only and can be shared across threads without locking.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::method::RestMethod;
use crate::name::{OperationName, OperationNameError};
use crate::template::{PathTemplate, TemplateError};

/// One row of a static operation table.
///
/// ## Examples
///
/// ```
/// use waypoint_define::{OperationEntry, RestMethod};
///
/// const SHOW_MEDIA: OperationEntry =
///     OperationEntry::new("show_media", RestMethod::Get, "medias/{string}");
/// assert_eq!(SHOW_MEDIA.name, "show_media");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationEntry {
    /// Logical operation name (e.g. `list_projects`).
    pub name: &'static str,
    /// HTTP verb.
    pub verb: RestMethod,
    /// Path template (e.g. `projects/{string}`).
    pub path: &'static str,
}

impl OperationEntry {
    /// Creates an entry; usable in `const` tables.
    pub const fn new(name: &'static str, verb: RestMethod, path: &'static str) -> Self {
        Self { name, verb, path }
    }
}

/// The resolved (verb, path template) pair for an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// HTTP verb the operation is sent with.
    pub verb: RestMethod,
    /// Parsed path template.
    pub path: PathTemplate,
}

impl OperationDescriptor {
    /// Creates a descriptor from an already-parsed template.
    pub fn new(verb: RestMethod, path: PathTemplate) -> Self {
        Self { verb, path }
    }

    /// Number of leading invocation arguments consumed by the path.
    pub fn path_arity(&self) -> usize {
        self.path.placeholder_count()
    }
}

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The operation name is not a valid identifier.
    #[error("invalid operation name '{name}': {source}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        #[source]
        source: OperationNameError,
    },

    /// Two entries share a name.
    #[error("duplicate operation: {name}")]
    DuplicateOperation {
        /// The repeated name.
        name: String,
    },

    /// A textual verb is not GET, POST, PUT or DELETE.
    #[error("operation '{name}' has unrecognized verb '{verb}'")]
    UnknownVerb {
        /// The operation declaring it.
        name: String,
        /// The verb as written.
        verb: String,
    },

    /// The path template is empty.
    #[error("operation '{name}' has an empty path template")]
    EmptyPath {
        /// The operation declaring it.
        name: String,
    },

    /// The path template could not be parsed.
    #[error("operation '{name}' has an invalid path template: {source}")]
    InvalidTemplate {
        /// The operation declaring it.
        name: String,
        /// The parse failure.
        #[source]
        source: TemplateError,
    },

    /// YAML input could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A registry file could not be read.
    #[error("failed to read registry file {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A YAML registry record; the verb stays textual until validated.
#[derive(Debug, Deserialize)]
struct OperationRecord {
    name: String,
    verb: String,
    path: String,
}

/// Immutable mapping from operation name to [`OperationDescriptor`].
///
/// ## Examples
///
/// ```
/// use waypoint_define::{OperationEntry, OperationRegistry, RestMethod};
///
/// let registry = OperationRegistry::from_entries(&[
///     OperationEntry::new("list_projects", RestMethod::Get, "projects"),
///     OperationEntry::new("show_project", RestMethod::Get, "projects/{string}"),
/// ])
/// .unwrap();
///
/// let descriptor = registry.lookup("show_project").unwrap();
/// assert_eq!(descriptor.verb, RestMethod::Get);
/// assert_eq!(descriptor.path_arity(), 1);
/// assert!(registry.lookup("nonexistent_op").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<OperationName, OperationDescriptor>,
}

impl OperationRegistry {
    /// Builds a registry from a static table.
    ///
    /// ## Errors
    ///
    /// Fails on the first entry with an invalid name, a duplicate name, or
    /// an empty or malformed path template.
    pub fn from_entries(entries: &[OperationEntry]) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for entry in entries {
            registry.insert(entry.name, entry.verb, entry.path)?;
        }
        Ok(registry)
    }

    /// Builds a registry from a YAML sequence of `{ name, verb, path }` records.
    ///
    /// ## Examples
    ///
    /// ```
    /// use waypoint_define::{OperationRegistry, RestMethod};
    ///
    /// let registry = OperationRegistry::from_yaml_str(r#"
    /// - name: show_media
    ///   verb: get
    ///   path: "medias/{string}"
    /// "#).unwrap();
    ///
    /// assert_eq!(registry.lookup("show_media").unwrap().verb, RestMethod::Get);
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`RegistryError::Yaml`] for malformed YAML, otherwise the same
    /// validation errors as [`from_entries`](Self::from_entries) plus
    /// [`RegistryError::UnknownVerb`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let records: Vec<OperationRecord> = serde_yaml::from_str(yaml)?;
        let mut registry = Self::default();
        for record in records {
            let verb =
                RestMethod::from_str(record.verb.trim()).map_err(|_| RegistryError::UnknownVerb {
                    name: record.name.clone(),
                    verb: record.verb.clone(),
                })?;
            registry.insert(&record.name, verb, &record.path)?;
        }
        Ok(registry)
    }

    /// Reads a YAML registry file. See [`from_yaml_str`](Self::from_yaml_str).
    ///
    /// ## Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn insert(&mut self, name: &str, verb: RestMethod, path: &str) -> Result<(), RegistryError> {
        let key = OperationName::new(name).map_err(|source| RegistryError::InvalidName {
            name: name.to_string(),
            source,
        })?;

        if path.trim().is_empty() {
            return Err(RegistryError::EmptyPath {
                name: name.to_string(),
            });
        }

        let template = PathTemplate::parse(path).map_err(|source| RegistryError::InvalidTemplate {
            name: name.to_string(),
            source,
        })?;

        if self.operations.contains_key(&key) {
            return Err(RegistryError::DuplicateOperation {
                name: name.to_string(),
            });
        }

        self.operations
            .insert(key, OperationDescriptor::new(verb, template));
        Ok(())
    }

    /// Looks up an operation by name. Pure read.
    pub fn lookup(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operations are registered.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(OperationName::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All `(name, descriptor)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperationDescriptor)> {
        let mut pairs: Vec<_> = self
            .operations
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
            .collect();
        pairs.sort_unstable_by_key(|(name, _)| *name);
        pairs.into_iter()
    }
}
