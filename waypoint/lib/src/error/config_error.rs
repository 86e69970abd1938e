//! Transport configuration errors.

use thiserror::Error;

/// Errors in transport configuration.
///
/// These errors occur while building an [`HttpTransport`](crate::HttpTransport)
/// or resolving a request URL, typically indicating programmer errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing or joining failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot have paths appended (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {url}")]
    CannotBeABase {
        /// The offending URL.
        url: String,
    },

    /// A rendered path resolved outside the base URL.
    #[error("Path '{path}' resolves outside base URL {base_url}")]
    PathEscapesBase {
        /// The rendered path as given to the transport.
        path: String,
        /// The base URL it was resolved against.
        base_url: String,
    },

    /// A default header name or value is invalid.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// The header name as given.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn invalid_header() {
        let err = ConfigError::InvalidHeader {
            name: "Bad Header".to_string(),
            message: "invalid HTTP header name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid header 'Bad Header': invalid HTTP header name"
        );
    }

    #[test]
    fn path_escapes_base() {
        let err = ConfigError::PathEscapesBase {
            path: "medias/../../admin".to_string(),
            base_url: "https://api.wistia.com/v1/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Path 'medias/../../admin' resolves outside base URL https://api.wistia.com/v1/"
        );
    }
}
