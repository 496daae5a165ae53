use crate::session::interface::Credential;
use crate::utils::secret::{optional_secret_string, secret_string};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Request body for `POST /sessions`
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct LoginRequest {
    /// Username or email
    pub login: String,
    /// Account password, mutually exclusive with `remember_token`
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_secret_string::serialize"
    )]
    pub password: Option<SecretString>,
    /// Remember token, mutually exclusive with `password`
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_secret_string::serialize"
    )]
    pub remember_token: Option<SecretString>,
    /// Asks the API to issue a new remember token
    pub remember_me: bool,
}

impl LoginRequest {
    /// Builds a login body carrying exactly one credential
    pub fn new(username: &str, credential: &Credential, remember_me: bool) -> Self {
        let (password, remember_token) = match credential {
            Credential::Password(p) => (Some(p.clone()), None),
            Credential::RememberToken(t) => (None, Some(t.clone())),
        };
        Self {
            login: username.to_string(),
            password,
            remember_token,
            remember_me,
        }
    }
}

/// User details returned with a new session
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    /// Email address on file
    #[serde(default)]
    pub email: String,
    /// Username
    pub username: String,
    /// External identifier
    #[serde(default)]
    pub external_id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload of a successful `POST /sessions`
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct LoginResponse {
    /// Authenticated user
    pub user: User,
    /// Token sent in the `Authorization` header of later requests
    #[serde(deserialize_with = "secret_string::deserialize")]
    pub session_token: SecretString,
    /// Renewal token, present when `remember-me` was requested
    #[serde(default, deserialize_with = "optional_secret_string::deserialize")]
    pub remember_token: Option<SecretString>,
    /// Expiry of `session_token`, when reported
    #[serde(default)]
    pub session_expiration: Option<DateTime<Utc>>,
}

/// Envelope wrapping every successful API payload
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload, absent on some malformed responses
    pub data: Option<T>,
    /// Request context echoed by the API
    #[serde(default)]
    pub context: Option<String>,
}
