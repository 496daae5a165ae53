use crate::constants::{API_URL, CERT_URL};
use crate::error::AppError;
use crate::session::response::{LoginRequest, LoginResponse};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tastytrade endpoint family a session talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live trading API
    #[default]
    Production,
    /// Certification API, used for testing
    Sandbox,
}

impl Environment {
    /// Selects the environment from the `is_test` flag
    #[must_use]
    pub fn from_is_test(is_test: bool) -> Self {
        if is_test {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Returns `true` for the sandbox environment
    #[must_use]
    pub fn is_test(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }

    /// Base URL of the REST API for this environment
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => API_URL,
            Environment::Sandbox => CERT_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Secret presented alongside the username at login
#[derive(Debug, Clone)]
pub enum Credential {
    /// Account password
    Password(SecretString),
    /// Remember token issued by a previous login with `remember_me`
    RememberToken(SecretString),
}

impl Credential {
    /// Wraps a password
    pub fn password(password: impl Into<String>) -> Self {
        Credential::Password(SecretString::from(password.into()))
    }

    /// Wraps a remember token
    pub fn remember_token(token: impl Into<String>) -> Self {
        Credential::RememberToken(SecretString::from(token.into()))
    }

    /// Returns the secret, still wrapped
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        match self {
            Credential::Password(s) | Credential::RememberToken(s) => s,
        }
    }

    /// Returns `true` if the secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret().expose_secret().is_empty()
    }

    /// Returns `true` if this is a remember token
    #[must_use]
    pub fn is_remember_token(&self) -> bool {
        matches!(self, Credential::RememberToken(_))
    }

    /// Short label used in log lines, never the secret itself
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::Password(_) => "password",
            Credential::RememberToken(_) => "remember-token",
        }
    }
}

/// Trait for talking to the Tastytrade sessions resource
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Environment the authenticator is bound to
    fn environment(&self) -> Environment;

    /// Base URL requests are sent to
    fn base_url(&self) -> &str;

    /// Creates a new session on the API
    ///
    /// # Arguments
    /// * `request` - Login body carrying the username and one credential
    /// * `otp` - One-time password for accounts with two-factor authentication
    ///
    /// # Returns
    /// * `Ok(LoginResponse)` - Tokens and user details issued by the API
    /// * `Err(AppError::Authentication)` - If the credential was rejected
    async fn create_session(
        &self,
        request: &LoginRequest,
        otp: Option<&SecretString>,
    ) -> Result<LoginResponse, AppError>;

    /// Checks whether a session token is still accepted.
    ///
    /// Returns `Ok(false)` when the API answers with 401.
    async fn validate_session(&self, session_token: &SecretString) -> Result<bool, AppError>;

    /// Invalidates a session token on the API
    async fn destroy_session(&self, session_token: &SecretString) -> Result<(), AppError>;
}
