//! Encoding forwarded arguments for the wire.
//!
//! GET and DELETE carry arguments as query pairs; POST and PUT carry them
//! as a JSON body.

use serde_json::{Map, Value};

use crate::error::ClientError;

/// Flattens object arguments into query pairs.
///
/// Each argument must be a JSON object of scalars. Strings are sent raw,
/// numbers and booleans through `to_string`, and nulls are skipped.
pub(crate) fn query_pairs(params: Vec<Value>) -> Result<Vec<(String, String)>, ClientError> {
    let mut pairs = Vec::new();

    for (index, param) in params.into_iter().enumerate() {
        let Value::Object(map) = param else {
            return Err(ClientError::invalid_params(format!(
                "query argument {index} must be an object"
            )));
        };

        for (key, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ClientError::invalid_params(format!(
                        "query parameter '{key}' must be a scalar"
                    )));
                }
            };
            pairs.push((key, value));
        }
    }

    Ok(pairs)
}

/// Folds body arguments into a single JSON document.
///
/// Nothing → no body; one argument → itself; several objects → one object
/// merged left to right; otherwise → an array of the arguments.
pub(crate) fn json_body(mut params: Vec<Value>) -> Option<Value> {
    match params.len() {
        0 => None,
        1 => params.pop(),
        _ if params.iter().all(Value::is_object) => {
            let mut merged = Map::new();
            for param in params {
                if let Value::Object(map) = param {
                    merged.extend(map);
                }
            }
            Some(Value::Object(merged))
        }
        _ => Some(Value::Array(params)),
    }
}
