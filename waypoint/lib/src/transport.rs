//! The transport capability consumed by the dispatcher.
//!
//! A transport performs the actual request for one verb: it receives the
//! rendered path and whatever arguments were left after path substitution.
//! Network I/O, authentication, retries and response decoding all live
//! behind this trait; the dispatcher never inspects `Output` or `Error`.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use waypoint_define::RestMethod;

/// Per-verb request capability.
///
/// Implementations may write the methods as `async fn`, provided the
/// resulting futures are `Send`.
///
/// ## Examples
///
/// ```rust,ignore
/// use waypoint::Transport;
/// use serde_json::Value;
///
/// struct Echo;
///
/// impl Transport for Echo {
///     type Output = String;
///     type Error = std::io::Error;
///
///     async fn get(&self, path: &str, _params: Vec<Value>) -> Result<String, Self::Error> {
///         Ok(format!("GET {path}"))
///     }
///     // post, put and delete alike
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Successful result, passed back to the caller untouched.
    type Output: Send;
    /// Failure, passed back to the caller untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends a GET request.
    fn get(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;

    /// Sends a POST request.
    fn post(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;

    /// Sends a PUT request.
    fn put(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;

    /// Sends a DELETE request.
    fn delete(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;

    /// Routes to the method matching `verb`.
    fn call(
        &self,
        verb: RestMethod,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        async move {
            match verb {
                RestMethod::Get => self.get(path, params).await,
                RestMethod::Post => self.post(path, params).await,
                RestMethod::Put => self.put(path, params).await,
                RestMethod::Delete => self.delete(path, params).await,
            }
        }
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    type Output = T::Output;
    type Error = T::Error;

    fn get(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).get(path, params)
    }

    fn post(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).post(path, params)
    }

    fn put(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).put(path, params)
    }

    fn delete(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).delete(path, params)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn get(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).get(path, params)
    }

    fn post(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).post(path, params)
    }

    fn put(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).put(path, params)
    }

    fn delete(
        &self,
        path: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).delete(path, params)
    }
}
