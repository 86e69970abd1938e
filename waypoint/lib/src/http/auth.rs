//! Authentication applied by the HTTP transport.

use crate::error::AuthError;

/// How the transport authenticates each request.
///
/// ## Examples
///
/// ```
/// use waypoint::AuthMethod;
///
/// let bearer = AuthMethod::BearerToken;
/// let basic = AuthMethod::Basic { username: "api".to_string() };
/// let query = AuthMethod::QueryParam("api_password".to_string());
/// # let _ = (bearer, basic, query);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthMethod {
    /// No authentication.
    #[default]
    None,
    /// `Authorization: Bearer <secret>`.
    BearerToken,
    /// HTTP Basic with a fixed username and the secret as password.
    Basic {
        /// The username sent alongside the secret.
        username: String,
    },
    /// The secret appended as a query parameter with this name.
    QueryParam(String),
}

/// Returns the value of the first set, non-empty variable in `env_vars`.
///
/// ## Errors
///
/// Returns [`AuthError::MissingCredential`] listing every variable checked.
pub fn credential_from_env(env_vars: &[&str]) -> Result<String, AuthError> {
    env_vars
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()))
        .ok_or_else(|| AuthError::MissingCredential {
            env_vars: env_vars.iter().map(|var| (*var).to_string()).collect(),
        })
}

pub(crate) fn apply(
    request: reqwest::RequestBuilder,
    auth: Option<&(AuthMethod, String)>,
) -> reqwest::RequestBuilder {
    let Some((method, secret)) = auth else {
        return request;
    };

    match method {
        AuthMethod::None => request,
        AuthMethod::BearerToken => request.bearer_auth(secret),
        AuthMethod::Basic { username } => request.basic_auth(username, Some(secret)),
        AuthMethod::QueryParam(name) => request.query(&[(name.as_str(), secret.as_str())]),
    }
}
