//! Response parsing errors.

use thiserror::Error;

/// Errors while decoding a successful response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_parse_wraps_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::from(json_err);
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
