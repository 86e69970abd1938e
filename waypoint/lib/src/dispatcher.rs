//! Resolving named invocations into transport calls.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;
use tracing::{Span, debug, instrument};
use waypoint_define::OperationRegistry;

use crate::error::DispatchError;
use crate::invocation::{Invocation, ResolvedCall};
use crate::transport::Transport;

/// Owner name reported in `UnknownOperation` errors when none is set.
const DEFAULT_OWNER: &str = "Dispatcher";

/// Routes named operations through an [`OperationRegistry`] to a [`Transport`].
///
/// The dispatcher holds no mutable state: the registry is shared behind an
/// `Arc` and the transport is given at construction, so one dispatcher can
/// serve concurrent callers.
///
/// ## Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use waypoint::{Dispatcher, HttpTransport};
/// use waypoint_define::{OperationEntry, OperationRegistry, RestMethod};
///
/// let registry = OperationRegistry::from_entries(&[
///     OperationEntry::new("show_sharing", RestMethod::Get, "projects/{string}/sharings/{integer}"),
/// ])?;
/// let dispatcher = Dispatcher::new(registry, transport).with_owner("WistiaClient");
///
/// // GET projects/abc123/sharings/42
/// let sharing = dispatcher.invoke("show_sharing", vec![json!("abc123"), json!(42)]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    registry: Arc<OperationRegistry>,
    transport: T,
    owner: Cow<'static, str>,
}

impl<T> Dispatcher<T> {
    /// Creates a dispatcher over `registry` that forwards to `transport`.
    pub fn new(registry: impl Into<Arc<OperationRegistry>>, transport: T) -> Self {
        Self {
            registry: registry.into(),
            transport,
            owner: Cow::Borrowed(DEFAULT_OWNER),
        }
    }

    /// Sets the owner name reported when an operation is not found.
    pub fn with_owner(mut self, owner: impl Into<Cow<'static, str>>) -> Self {
        self.owner = owner.into();
        self
    }

    /// The owner name reported in errors.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The operation table.
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// The transport calls are forwarded to.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves an invocation without touching the transport.
    ///
    /// Looks the name up, splits the arguments at the template's slot count
    /// and renders the path.
    ///
    /// ## Errors
    ///
    /// - [`DispatchError::UnknownOperation`] if the name is not registered.
    /// - [`DispatchError::InsufficientArguments`] if there are fewer
    ///   arguments than path slots.
    /// - [`DispatchError::TypeMismatch`] if a path argument does not fit its
    ///   slot type.
    pub fn resolve(&self, invocation: Invocation) -> Result<ResolvedCall, DispatchError> {
        let Invocation { name, mut args } = invocation;

        let Some(descriptor) = self.registry.lookup(&name) else {
            return Err(DispatchError::UnknownOperation {
                operation: name,
                owner: self.owner.to_string(),
            });
        };

        let arity = descriptor.path_arity().min(args.len());
        let params = args.split_off(arity);
        let path = descriptor
            .path
            .render(&args)
            .map_err(|e| DispatchError::from_render(&name, e))?;

        Ok(ResolvedCall {
            operation: name,
            verb: descriptor.verb,
            path,
            params,
        })
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Invokes `name` with positional `args`.
    ///
    /// Returns the transport's result unchanged.
    ///
    /// ## Errors
    ///
    /// Everything [`resolve`](Self::resolve) can return, in which case the
    /// transport is never called, plus [`DispatchError::Transport`] carrying
    /// the transport's own failure.
    pub async fn invoke(
        &self,
        name: &str,
        args: Vec<Value>,
    ) -> Result<T::Output, DispatchError<T::Error>> {
        self.dispatch(Invocation::new(name, args)).await
    }

    /// Invokes a prepared [`Invocation`].
    ///
    /// ## Errors
    ///
    /// See [`invoke`](Self::invoke).
    #[instrument(
        name = "dispatch",
        skip(self, invocation),
        fields(
            operation = %invocation.name,
            owner = %self.owner,
            http.method = tracing::field::Empty,
            http.path = tracing::field::Empty,
        )
    )]
    pub async fn dispatch(
        &self,
        invocation: Invocation,
    ) -> Result<T::Output, DispatchError<T::Error>> {
        let call = self.resolve(invocation).map_err(|e| e.widen::<T::Error>())?;

        let span = Span::current();
        span.record("http.method", call.verb.to_string().as_str());
        span.record("http.path", call.path.as_str());
        debug!(
            verb = %call.verb,
            path = %call.path,
            params = call.params.len(),
            "resolved operation"
        );

        self.transport
            .call(call.verb, &call.path, call.params)
            .await
            .map_err(DispatchError::Transport)
    }
}
