//! Wistia Data API operations.
//!
//! ## Operations
//!
//! | Name | Verb | Path |
//! |------|------|------|
//! | list_projects | GET | projects |
//! | show_project | GET | projects/{string} |
//! | create_project | POST | projects |
//! | update_project | PUT | projects/{string} |
//! | delete_project | DELETE | projects/{string} |
//! | copy_project | POST | projects/{string}/copy |
//! | list_sharings | GET | projects/{string}/sharings |
//! | show_sharing | GET | projects/{string}/sharings/{integer} |
//! | create_sharing | POST | projects/{string}/sharings |
//! | update_sharing | PUT | projects/{string}/sharings/{integer} |
//! | delete_sharing | DELETE | projects/{string}/sharings/{integer} |
//! | list_medias | GET | medias |
//! | show_media | GET | medias/{string} |
//! | update_media | PUT | medias/{string} |
//! | delete_media | DELETE | medias/{string} |
//! | copy_media | POST | medias/{string}/copy |
//! | stats_media | GET | medias/{string}/stats |
//! | show_account | GET | account |
//! | show_customizations | GET | medias/{string}/customizations |
//! | create_customizations | POST | medias/{string}/customizations |
//! | update_customizations | PUT | medias/{string}/customizations |
//! | delete_customizations | DELETE | medias/{string}/customizations |
//! | list_captions | GET | medias/{string}/captions |
//! | show_captions | GET | medias/{string}/captions/{string} |
//! | create_captions | POST | medias/{string}/captions |
//! | update_captions | PUT | medias/{string}/captions/{string} |
//! | delete_captions | DELETE | medias/{string}/captions/{string} |

use url::Url;
use waypoint::{AuthMethod, Dispatcher, HttpTransport, TransportError};
use waypoint_define::{OperationEntry, OperationRegistry, RegistryError, RestMethod};

/// Base URL of the Wistia Data API.
pub const WISTIA_BASE_URL: &str = "https://api.wistia.com/v1";

/// Environment variables checked, in order, for the API token.
pub const WISTIA_ENV_AUTH: &[&str] = &["WISTIA_API_TOKEN", "WISTIA_API_PASSWORD"];

/// Owner name reported when an unknown operation is invoked.
pub const WISTIA_OWNER: &str = "WistiaClient";

/// Every Wistia operation.
pub const WISTIA_OPERATIONS: &[OperationEntry] = &[
    // Projects
    OperationEntry::new("list_projects", RestMethod::Get, "projects"),
    OperationEntry::new("show_project", RestMethod::Get, "projects/{string}"),
    OperationEntry::new("create_project", RestMethod::Post, "projects"),
    OperationEntry::new("update_project", RestMethod::Put, "projects/{string}"),
    OperationEntry::new("delete_project", RestMethod::Delete, "projects/{string}"),
    OperationEntry::new("copy_project", RestMethod::Post, "projects/{string}/copy"),
    // Project sharings
    OperationEntry::new("list_sharings", RestMethod::Get, "projects/{string}/sharings"),
    OperationEntry::new(
        "show_sharing",
        RestMethod::Get,
        "projects/{string}/sharings/{integer}",
    ),
    OperationEntry::new("create_sharing", RestMethod::Post, "projects/{string}/sharings"),
    OperationEntry::new(
        "update_sharing",
        RestMethod::Put,
        "projects/{string}/sharings/{integer}",
    ),
    OperationEntry::new(
        "delete_sharing",
        RestMethod::Delete,
        "projects/{string}/sharings/{integer}",
    ),
    // Medias
    OperationEntry::new("list_medias", RestMethod::Get, "medias"),
    OperationEntry::new("show_media", RestMethod::Get, "medias/{string}"),
    OperationEntry::new("update_media", RestMethod::Put, "medias/{string}"),
    OperationEntry::new("delete_media", RestMethod::Delete, "medias/{string}"),
    OperationEntry::new("copy_media", RestMethod::Post, "medias/{string}/copy"),
    OperationEntry::new("stats_media", RestMethod::Get, "medias/{string}/stats"),
    // Account
    OperationEntry::new("show_account", RestMethod::Get, "account"),
    // Media customizations
    OperationEntry::new(
        "show_customizations",
        RestMethod::Get,
        "medias/{string}/customizations",
    ),
    OperationEntry::new(
        "create_customizations",
        RestMethod::Post,
        "medias/{string}/customizations",
    ),
    OperationEntry::new(
        "update_customizations",
        RestMethod::Put,
        "medias/{string}/customizations",
    ),
    OperationEntry::new(
        "delete_customizations",
        RestMethod::Delete,
        "medias/{string}/customizations",
    ),
    // Media captions
    OperationEntry::new("list_captions", RestMethod::Get, "medias/{string}/captions"),
    OperationEntry::new(
        "show_captions",
        RestMethod::Get,
        "medias/{string}/captions/{string}",
    ),
    OperationEntry::new("create_captions", RestMethod::Post, "medias/{string}/captions"),
    OperationEntry::new(
        "update_captions",
        RestMethod::Put,
        "medias/{string}/captions/{string}",
    ),
    OperationEntry::new(
        "delete_captions",
        RestMethod::Delete,
        "medias/{string}/captions/{string}",
    ),
];

/// Builds the Wistia operation registry.
///
/// ## Errors
///
/// Only fails if [`WISTIA_OPERATIONS`] itself is malformed.
///
/// ## Examples
///
/// ```
/// use waypoint_definitions::wistia::define_wistia_registry;
/// use waypoint_define::RestMethod;
///
/// let registry = define_wistia_registry().unwrap();
/// let descriptor = registry.lookup("update_sharing").unwrap();
/// assert_eq!(descriptor.verb, RestMethod::Put);
/// assert_eq!(descriptor.path_arity(), 2);
/// ```
pub fn define_wistia_registry() -> Result<OperationRegistry, RegistryError> {
    OperationRegistry::from_entries(WISTIA_OPERATIONS)
}

/// Wraps `transport` in a dispatcher over the Wistia operations.
///
/// ## Errors
///
/// See [`define_wistia_registry`].
pub fn wistia_client<T>(transport: T) -> Result<Dispatcher<T>, RegistryError> {
    Ok(Dispatcher::new(define_wistia_registry()?, transport).with_owner(WISTIA_OWNER))
}

/// Builds an [`HttpTransport`] for the Wistia API.
///
/// Requests go to `base_url` (normally [`WISTIA_BASE_URL`]) with a `.json`
/// suffix and a bearer token read from [`WISTIA_ENV_AUTH`].
///
/// ## Errors
///
/// Returns an error if the URL is invalid or no token variable is set.
pub fn wistia_http_transport(base_url: &str) -> Result<HttpTransport, TransportError> {
    let base_url = Url::parse(base_url).map_err(waypoint::ConfigError::InvalidUrl)?;
    HttpTransport::builder(base_url)
        .path_suffix(".json")
        .auth_from_env(AuthMethod::BearerToken, WISTIA_ENV_AUTH)?
        .build()
}
