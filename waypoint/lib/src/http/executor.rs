//! Request execution with tracing instrumentation.
//!
//! [`HttpTransport`] implements [`Transport`] over `reqwest`, turning a
//! rendered path plus forwarded arguments into an HTTP request against a
//! base URL and decoding the JSON response.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{Span, debug, instrument};
use url::Url;
use waypoint_define::RestMethod;

use super::auth::{self, AuthMethod};
use super::params;
use crate::error::{AuthError, ClientError, ConfigError, TransportError, ValidationError};
use crate::transport::Transport;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    path_suffix: Option<String>,
    auth: Option<(AuthMethod, String)>,
}

impl HttpTransportBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            path_suffix: None,
            auth: None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, TransportError> {
        let invalid = |message: String| ConfigError::InvalidHeader {
            name: name.as_ref().to_string(),
            message,
        };
        let header_name =
            HeaderName::try_from(name.as_ref()).map_err(|e| invalid(e.to_string()))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| invalid(e.to_string()))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Appends `suffix` to every rendered path (e.g. `.json`).
    pub fn path_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.path_suffix = Some(suffix.into());
        self
    }

    /// Sets the authentication method and its secret.
    pub fn auth(mut self, method: AuthMethod, secret: impl Into<String>) -> Self {
        self.auth = Some((method, secret.into()));
        self
    }

    /// Sets the authentication method, reading the secret from the first
    /// set variable in `env_vars`.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if none of them is set.
    pub fn auth_from_env(
        self,
        method: AuthMethod,
        env_vars: &[&str],
    ) -> Result<Self, TransportError> {
        let secret = auth::credential_from_env(env_vars)?;
        Ok(self.auth(method, secret))
    }

    /// Builds the [`HttpTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot take relative paths or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let mut base_url = self.base_url;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase {
                url: base_url.to_string(),
            }
            .into());
        }
        // Without a trailing slash `join` would replace the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(HttpTransport {
            client,
            base_url,
            timeout: self.timeout,
            path_suffix: self.path_suffix,
            auth: self.auth,
        })
    }
}

/// Async HTTP transport for dispatched operations.
///
/// GET and DELETE send forwarded arguments as query parameters; POST and
/// PUT send them as a JSON body. Successful responses are decoded as JSON
/// (an empty body yields `Value::Null`).
///
/// ## Examples
///
/// ```rust,ignore
/// use waypoint::{AuthMethod, Dispatcher, HttpTransport};
/// use url::Url;
///
/// let transport = HttpTransport::builder(Url::parse("https://api.wistia.com/v1")?)
///     .path_suffix(".json")
///     .auth_from_env(AuthMethod::BearerToken, &["WISTIA_API_TOKEN"])?
///     .build()?;
///
/// let dispatcher = Dispatcher::new(registry, transport);
/// let projects = dispatcher.invoke("list_projects", vec![]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    path_suffix: Option<String>,
    auth: Option<(AuthMethod, String)>,
}

impl HttpTransport {
    /// Creates a new builder for the given base URL.
    pub fn builder(base_url: Url) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// Creates a transport with default settings.
    ///
    /// ## Errors
    ///
    /// See [`HttpTransportBuilder::build`].
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        Self::builder(base_url).build()
    }

    /// The base URL every path is joined onto (always ends in `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a rendered path against the base URL.
    ///
    /// Leading slashes are dropped so paths stay relative to the base. The
    /// joined URL must keep the base origin and path prefix and carry no
    /// query or fragment, so a path argument cannot redirect the request
    /// (and its credentials) elsewhere.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::InvalidUrl`] if the joined URL is invalid.
    /// - [`ConfigError::PathEscapesBase`] if the path resolves outside the
    ///   base URL.
    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let mut relative = path.trim_start_matches('/').to_string();
        if let Some(suffix) = &self.path_suffix {
            relative.push_str(suffix);
        }
        let url = self
            .base_url
            .join(&relative)
            .map_err(ConfigError::InvalidUrl)?;

        let contained = url.origin() == self.base_url.origin()
            && url.path().starts_with(self.base_url.path())
            && url.query().is_none()
            && url.fragment().is_none();
        if !contained {
            return Err(ConfigError::PathEscapesBase {
                path: path.to_string(),
                base_url: self.base_url.to_string(),
            }
            .into());
        }
        Ok(url)
    }

    /// Sends one request and decodes the response.
    ///
    /// ## Errors
    ///
    /// - [`ClientError`] for network failures, timeouts, unencodable
    ///   arguments and non-success statuses other than 401/403.
    /// - [`AuthError`] for 401 and 403 responses.
    /// - [`ValidationError`] if a non-empty body is not valid JSON.
    #[instrument(
        name = "http_request",
        skip(self, params),
        fields(
            http.method = %verb,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute(
        &self,
        verb: RestMethod,
        path: &str,
        params: Vec<Value>,
    ) -> Result<Value, TransportError> {
        let url = self.url_for(path)?;
        Span::current().record("http.url", url.as_str());

        let mut request = self.client.request(to_reqwest(verb), url);
        if verb.has_body() {
            if let Some(body) = params::json_body(params) {
                request = request.json(&body);
            }
        } else {
            let pairs = params::query_pairs(params)?;
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
        }
        request = auth::apply(request, self.auth.as_ref());

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);
        debug!(status = status_code, "response received");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            if status_code == 401 {
                return Err(AuthError::AuthenticationFailed { message }.into());
            }
            if status_code == 403 {
                return Err(AuthError::InsufficientPermissions {
                    operation: format!("{verb} {path}"),
                }
                .into());
            }

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        Ok(decode_body(&body)?)
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}

impl Transport for HttpTransport {
    type Output = Value;
    type Error = TransportError;

    async fn get(&self, path: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        self.execute(RestMethod::Get, path, params).await
    }

    async fn post(&self, path: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        self.execute(RestMethod::Post, path, params).await
    }

    async fn put(&self, path: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        self.execute(RestMethod::Put, path, params).await
    }

    async fn delete(&self, path: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        self.execute(RestMethod::Delete, path, params).await
    }
}

/// Converts to the equivalent `reqwest::Method`.
fn to_reqwest(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Delete => reqwest::Method::DELETE,
    }
}

fn decode_body(body: &Bytes) -> Result<Value, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}
