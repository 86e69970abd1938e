//! Invocation failures surfaced by the dispatcher.

use std::convert::Infallible;

use thiserror::Error;
use waypoint_define::{PlaceholderKind, RenderError};

/// Error returned by [`Dispatcher::invoke`](crate::Dispatcher::invoke).
///
/// The first three variants are detected before the transport is touched.
/// `Transport` carries the transport's own error untouched.
///
/// `E` defaults to [`Infallible`] for results that never reach a transport,
/// such as [`Dispatcher::resolve`](crate::Dispatcher::resolve).
///
/// ## Examples
///
/// ```rust,ignore
/// match dispatcher.invoke("show_media", args).await {
///     Ok(media) => println!("{media}"),
///     Err(DispatchError::UnknownOperation { operation, .. }) => eprintln!("typo? {operation}"),
///     Err(DispatchError::Transport(e)) => eprintln!("request failed: {e}"),
///     Err(other) => eprintln!("bad arguments: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DispatchError<E = Infallible> {
    /// The name is not in the registry.
    #[error("operation '{operation}' not found on {owner}")]
    UnknownOperation {
        /// The name that was invoked.
        operation: String,
        /// The type owning the dispatcher (e.g. `WistiaClient`).
        owner: String,
    },

    /// Fewer arguments than the path template has slots.
    #[error("operation '{operation}' expects {expected} path argument(s), got {supplied}")]
    InsufficientArguments {
        /// The operation being invoked.
        operation: String,
        /// Slots in the path template.
        expected: usize,
        /// Arguments supplied.
        supplied: usize,
    },

    /// A path argument cannot be coerced to its slot type.
    #[error("operation '{operation}': path argument {position} must be {expected}, got {found}")]
    TypeMismatch {
        /// The operation being invoked.
        operation: String,
        /// Zero-based argument index.
        position: usize,
        /// The slot's declared type.
        expected: PlaceholderKind,
        /// Description of the supplied value.
        found: String,
    },

    /// The transport failed.
    #[error(transparent)]
    Transport(E),
}

impl DispatchError {
    pub(crate) fn from_render(operation: &str, err: RenderError) -> Self {
        match err {
            RenderError::InsufficientArguments { expected, supplied } => {
                Self::InsufficientArguments {
                    operation: operation.to_string(),
                    expected,
                    supplied,
                }
            }
            RenderError::TypeMismatch {
                position,
                expected,
                found,
            } => Self::TypeMismatch {
                operation: operation.to_string(),
                position,
                expected,
                found,
            },
        }
    }

    /// Re-types a resolution error for a call that goes on to a transport.
    pub fn widen<E>(self) -> DispatchError<E> {
        match self {
            Self::UnknownOperation { operation, owner } => {
                DispatchError::UnknownOperation { operation, owner }
            }
            Self::InsufficientArguments {
                operation,
                expected,
                supplied,
            } => DispatchError::InsufficientArguments {
                operation,
                expected,
                supplied,
            },
            Self::TypeMismatch {
                operation,
                position,
                expected,
                found,
            } => DispatchError::TypeMismatch {
                operation,
                position,
                expected,
                found,
            },
            Self::Transport(never) => match never {},
        }
    }
}

impl<E> DispatchError<E> {
    /// Returns `true` if the failure came from the transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the transport's error, if that is where the failure came from.
    pub fn transport_error(&self) -> Option<&E> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }

    /// Consumes the error, returning the transport's error if present.
    pub fn into_transport_error(self) -> Option<E> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operation_names_owner() {
        let err: DispatchError = DispatchError::UnknownOperation {
            operation: "nonexistent_op".to_string(),
            owner: "WistiaClient".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'nonexistent_op' not found on WistiaClient"
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn render_errors_carry_operation() {
        let err = DispatchError::from_render(
            "show_sharing",
            RenderError::InsufficientArguments {
                expected: 2,
                supplied: 1,
            },
        );
        assert_eq!(
            err.to_string(),
            "operation 'show_sharing' expects 2 path argument(s), got 1"
        );

        let err = DispatchError::from_render(
            "show_sharing",
            RenderError::TypeMismatch {
                position: 1,
                expected: PlaceholderKind::Integer,
                found: "object".to_string(),
            },
        );
        assert!(matches!(
            err,
            DispatchError::TypeMismatch { position: 1, expected: PlaceholderKind::Integer, .. }
        ));
    }

    #[test]
    fn widen_preserves_variant() {
        let err: DispatchError<std::io::Error> = DispatchError::UnknownOperation {
            operation: "x".to_string(),
            owner: "Dispatcher".to_string(),
        }
        .widen();
        assert!(matches!(err, DispatchError::UnknownOperation { .. }));
        assert!(err.transport_error().is_none());
    }

    #[test]
    fn transport_errors_display_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
        let err = DispatchError::Transport(io);
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "peer reset");
        assert_eq!(
            err.into_transport_error().unwrap().kind(),
            std::io::ErrorKind::ConnectionReset
        );
    }
}
