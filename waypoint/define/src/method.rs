//! HTTP verbs recognized by the operation registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP methods an operation can be declared with.
///
/// Only the four verbs a CRUD-style resource needs are recognized. Parsing
/// is case-insensitive so tables written as `get` or `GET` both load.
///
/// ## Examples
///
/// ```
/// use waypoint_define::RestMethod;
///
/// let method: RestMethod = "put".parse().unwrap();
/// assert_eq!(method, RestMethod::Put);
/// assert_eq!(method.to_string(), "PUT");
/// assert!(method.has_body());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method carries its parameters in a request body.
    ///
    /// POST and PUT send a body; GET and DELETE send query parameters.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns `true` if this method is idempotent.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post)
    }

    /// Returns `true` if this method is safe (read-only).
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn from_str_ignores_case() {
        assert_eq!(RestMethod::from_str("GET").unwrap(), RestMethod::Get);
        assert_eq!(RestMethod::from_str("post").unwrap(), RestMethod::Post);
        assert_eq!(RestMethod::from_str("Put").unwrap(), RestMethod::Put);
        assert_eq!(RestMethod::from_str("delete").unwrap(), RestMethod::Delete);
    }

    #[test]
    fn from_str_rejects_unrecognized_verbs() {
        assert!(RestMethod::from_str("PATCH").is_err());
        assert!(RestMethod::from_str("HEAD").is_err());
        assert!(RestMethod::from_str("").is_err());
    }

    #[test]
    fn iterates_all_four_verbs() {
        let methods: Vec<_> = RestMethod::iter().collect();
        assert_eq!(
            methods,
            vec![
                RestMethod::Get,
                RestMethod::Post,
                RestMethod::Put,
                RestMethod::Delete
            ]
        );
    }

    #[test]
    fn body_and_safety_flags() {
        assert!(!RestMethod::Get.has_body());
        assert!(RestMethod::Post.has_body());
        assert!(RestMethod::Put.has_body());
        assert!(!RestMethod::Delete.has_body());

        assert!(RestMethod::Get.is_safe());
        assert!(!RestMethod::Delete.is_safe());
        assert!(!RestMethod::Post.is_idempotent());
        assert!(RestMethod::Delete.is_idempotent());
    }

    #[test]
    fn serde_uses_uppercase_names() {
        let serialized = serde_json::to_string(&RestMethod::Delete).unwrap();
        assert_eq!(serialized, "\"DELETE\"");

        let parsed: RestMethod = serde_json::from_str("\"GET\"").unwrap();
        assert_eq!(parsed, RestMethod::Get);
    }
}
