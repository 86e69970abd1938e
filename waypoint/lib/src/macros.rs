/// Invokes a named operation with positional arguments.
///
/// Each argument is converted with `Into<serde_json::Value>`, so strings,
/// integers, booleans and `json!` literals can be mixed freely. Expands to
/// the [`Dispatcher::invoke`](crate::Dispatcher::invoke) future.
///
/// ## Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use waypoint::invoke;
///
/// let sharing = invoke!(dispatcher, "show_sharing", "abc123", 42).await?;
/// let project = invoke!(dispatcher, "create_project", json!({"name": "x"})).await?;
/// let projects = invoke!(dispatcher, "list_projects").await?;
/// ```
#[macro_export]
macro_rules! invoke {
    ($dispatcher:expr, $name:expr $(, $arg:expr)* $(,)?) => {
        $dispatcher.invoke(
            $name,
            ::std::vec![$(::std::convert::Into::<$crate::__private::Value>::into($arg)),*],
        )
    };
}

/// Builds an [`Invocation`](crate::Invocation) without sending it.
///
/// ## Examples
///
/// ```
/// use waypoint::invocation;
///
/// let call = invocation!("show_sharing", "abc123", 42);
/// assert_eq!(call.args.len(), 2);
/// ```
#[macro_export]
macro_rules! invocation {
    ($name:expr $(, $arg:expr)* $(,)?) => {
        $crate::Invocation::new(
            $name,
            ::std::vec![$(::std::convert::Into::<$crate::__private::Value>::into($arg)),*],
        )
    };
}
