//! Transient values describing a single call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use waypoint_define::RestMethod;

/// A named call with its positional arguments.
///
/// Leading arguments fill the operation's path slots; the rest are forwarded
/// to the transport in order.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use waypoint::Invocation;
///
/// let invocation = Invocation::named("update_project")
///     .arg("abc123")
///     .arg(json!({"name": "Renamed"}));
///
/// assert_eq!(invocation.name, "update_project");
/// assert_eq!(invocation.args.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    /// Operation name to resolve.
    pub name: String,
    /// Positional arguments, path arguments first.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Invocation {
    /// Creates an invocation with the given arguments.
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Creates an invocation with no arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Appends one argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }
}

/// An invocation after resolution: what the transport will be asked to do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCall {
    /// The operation that was resolved.
    pub operation: String,
    /// Verb declared for the operation.
    pub verb: RestMethod,
    /// Path with every slot filled.
    pub path: String,
    /// Arguments left over after path substitution, in order.
    pub params: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_appends_in_order() {
        let invocation = Invocation::named("show_sharing").arg("abc123").arg(42);
        assert_eq!(invocation.args, vec![json!("abc123"), json!(42)]);
    }

    #[test]
    fn deserializes_without_args() {
        let invocation: Invocation =
            serde_json::from_value(json!({"name": "list_projects"})).unwrap();
        assert_eq!(invocation, Invocation::named("list_projects"));
    }
}
