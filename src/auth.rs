/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authenticated sessions for the Tastytrade API
//!
//! A [`Session`] exists only once the API has accepted a username together
//! with either a password or a remember token. It carries:
//! - the session token used to authorize later requests
//! - the remember token, when one was requested with `remember_me`
//! - the environment (production or sandbox) it was created against
//!
//! # Example
//! ```ignore
//! use tastytrade_client::prelude::*;
//!
//! let session = Session::builder("trader1")
//!     .password("correct-password")
//!     .is_test(true)
//!     .remember_me(true)
//!     .login()
//!     .await?;
//!
//! let token = session.remember_token().map(|t| t.expose_secret().to_string());
//! ```

use crate::config::Config;
use crate::constants::REMEMBER_TOKEN_VALIDITY_DAYS;
use crate::error::AppError;
use crate::session::auth::TastytradeAuth;
use crate::session::interface::{Authenticator, Credential, Environment};
use crate::session::response::{LoginRequest, User};
use crate::utils::secret::{optional_secret_string, secret_string};
use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Options accepted when creating a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Log in against the sandbox instead of production
    pub is_test: bool,
    /// Ask the API for a remember token
    pub remember_me: bool,
    /// One-time password for accounts with two-factor authentication
    pub two_factor_code: Option<SecretString>,
}

/// Authenticated session for the Tastytrade API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredSession")]
pub struct Session {
    username: String,
    environment: Environment,
    base_url: String,
    remember_me: bool,
    #[serde(serialize_with = "secret_string::serialize")]
    session_token: SecretString,
    #[serde(serialize_with = "optional_secret_string::serialize")]
    remember_token: Option<SecretString>,
    remember_token_issued_at: Option<DateTime<Utc>>,
    session_expiration: Option<DateTime<Utc>>,
    user: User,
}

impl Session {
    /// Logs in and returns a new session
    ///
    /// # Arguments
    /// * `username` - Username or email
    /// * `credential` - Password or remember token
    /// * `options` - Environment selection, remember-me and two-factor code
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError::Authentication)` - If the credential was rejected
    /// * `Err(AppError::InvalidInput)` - If the username or credential is empty
    /// * `Err(AppError::Network)` - If the API could not be reached
    pub async fn login(
        username: impl Into<String>,
        credential: Credential,
        options: SessionOptions,
    ) -> Result<Self, AppError> {
        let auth = TastytradeAuth::new(Environment::from_is_test(options.is_test))?;
        Self::login_with(&auth, username, credential, options).await
    }

    /// Logs in through the given authenticator.
    ///
    /// `options.is_test` must match the environment of `auth`.
    pub async fn login_with<A>(
        auth: &A,
        username: impl Into<String>,
        credential: Credential,
        options: SessionOptions,
    ) -> Result<Self, AppError>
    where
        A: Authenticator + ?Sized,
    {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(AppError::InvalidInput("username must not be empty".to_string()));
        }
        if credential.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{} must not be empty",
                credential.kind()
            )));
        }

        let environment = Environment::from_is_test(options.is_test);
        if auth.environment() != environment {
            return Err(AppError::InvalidInput(format!(
                "authenticator targets {} but {} was requested",
                auth.environment(),
                environment
            )));
        }

        info!(
            "Logging in {} to {} with {}",
            username,
            environment,
            credential.kind()
        );

        let request = LoginRequest::new(&username, &credential, options.remember_me);
        let response = auth
            .create_session(&request, options.two_factor_code.as_ref())
            .await?;

        let remember_token = if options.remember_me {
            let token = response
                .remember_token
                .filter(|t| !t.expose_secret().is_empty());
            if token.is_none() {
                warn!("Remember token requested but not returned for {}", username);
            }
            token
        } else {
            None
        };
        let remember_token_issued_at = remember_token.as_ref().map(|_| Utc::now());

        debug!(
            "Session for {} expires at {:?}",
            username, response.session_expiration
        );

        Ok(Self {
            username,
            environment,
            base_url: auth.base_url().to_string(),
            remember_me: options.remember_me,
            session_token: response.session_token,
            remember_token,
            remember_token_issued_at,
            session_expiration: response.session_expiration,
            user: response.user,
        })
    }

    /// Logs in with the credentials, environment and endpoint held in `config`
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let auth = TastytradeAuth::from_config(config)?;
        let credential = config.credentials.credential()?;
        let options = SessionOptions {
            is_test: config.is_test,
            remember_me: config.remember_me,
            two_factor_code: None,
        };
        Self::login_with(&auth, config.credentials.username.clone(), credential, options).await
    }

    /// Starts building a session for `username`
    pub fn builder(username: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(username)
    }

    /// Username the session was created for
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Token to send in the `Authorization` header of later requests
    pub fn auth_token(&self) -> &SecretString {
        &self.session_token
    }

    /// Remember token, present only if `remember_me` was requested and granted
    pub fn remember_token(&self) -> Option<&SecretString> {
        self.remember_token.as_ref()
    }

    /// Whether a remember token was requested at login
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// Whether the session targets the sandbox
    pub fn is_test(&self) -> bool {
        self.environment.is_test()
    }

    /// Environment the session targets
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base URL the session was created against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// User returned at login
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Server reported expiry of the session token
    pub fn session_expiration(&self) -> Option<DateTime<Utc>> {
        self.session_expiration
    }

    /// Advisory expiry of the remember token.
    ///
    /// The API enforces the real window; a token may be revoked earlier.
    pub fn remember_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.remember_token_issued_at
            .map(|issued| issued + Duration::days(REMEMBER_TOKEN_VALIDITY_DAYS))
    }

    /// Whether the server reported expiry has passed. Unknown expiry counts as valid.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.session_expiration
            .is_some_and(|expiry| expiry <= Utc::now())
    }

    fn authenticator(&self) -> Result<TastytradeAuth, AppError> {
        TastytradeAuth::with_base_url(self.environment, self.base_url.clone())
    }

    /// Asks the API whether the session token is still accepted
    pub async fn validate(&self) -> Result<bool, AppError> {
        self.authenticator()?
            .validate_session(&self.session_token)
            .await
    }

    /// Logs out, invalidating the session token on the API
    pub async fn destroy(self) -> Result<(), AppError> {
        info!("Logging out {}", self.username);
        self.authenticator()?
            .destroy_session(&self.session_token)
            .await
    }

    /// Creates a fresh session from the remember token held by this one.
    ///
    /// The new session asks for a new remember token so the chain can continue.
    ///
    /// # Returns
    /// * `Ok(Session)` - New session in the same environment
    /// * `Err(AppError::Authentication)` - If no remember token is held or it was rejected
    pub async fn renew(&self) -> Result<Session, AppError> {
        let Some(token) = &self.remember_token else {
            return Err(AppError::Authentication(
                "no remember token available".to_string(),
            ));
        };
        let auth = self.authenticator()?;
        let options = SessionOptions {
            is_test: self.is_test(),
            remember_me: true,
            two_factor_code: None,
        };
        Self::login_with(
            &auth,
            self.username.clone(),
            Credential::RememberToken(token.clone()),
            options,
        )
        .await
    }
}

/// Serialized form of a [`Session`], checked before a session is rebuilt from it
#[derive(Deserialize)]
struct StoredSession {
    username: String,
    environment: Environment,
    base_url: String,
    remember_me: bool,
    #[serde(deserialize_with = "secret_string::deserialize")]
    session_token: SecretString,
    #[serde(default, deserialize_with = "optional_secret_string::deserialize")]
    remember_token: Option<SecretString>,
    remember_token_issued_at: Option<DateTime<Utc>>,
    session_expiration: Option<DateTime<Utc>>,
    user: User,
}

impl TryFrom<StoredSession> for Session {
    type Error = AppError;

    fn try_from(s: StoredSession) -> Result<Self, Self::Error> {
        if s.username.is_empty() || s.session_token.expose_secret().is_empty() {
            return Err(AppError::InvalidInput(
                "stored session is missing its username or token".to_string(),
            ));
        }
        let remember_token = if s.remember_me { s.remember_token } else { None };
        Ok(Self {
            username: s.username,
            environment: s.environment,
            base_url: s.base_url,
            remember_me: s.remember_me,
            session_token: s.session_token,
            remember_token_issued_at: remember_token.as_ref().and(s.remember_token_issued_at),
            remember_token,
            session_expiration: s.session_expiration,
            user: s.user,
        })
    }
}

/// Builder for [`Session`]
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    username: String,
    credential: Option<Credential>,
    options: SessionOptions,
    base_url: Option<String>,
}

impl SessionBuilder {
    /// Creates a builder for `username` with default options
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            credential: None,
            options: SessionOptions::default(),
            base_url: None,
        }
    }

    /// Logs in with a password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.credential = Some(Credential::password(password));
        self
    }

    /// Logs in with a remember token instead of a password
    pub fn remember_token(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(Credential::remember_token(token));
        self
    }

    /// Targets the sandbox when `true`
    pub fn is_test(mut self, is_test: bool) -> Self {
        self.options.is_test = is_test;
        self
    }

    /// Requests a remember token
    pub fn remember_me(mut self, remember_me: bool) -> Self {
        self.options.remember_me = remember_me;
        self
    }

    /// Sends a one-time password with the login
    pub fn two_factor_code(mut self, code: impl Into<String>) -> Self {
        self.options.two_factor_code = Some(SecretString::from(code.into()));
        self
    }

    /// Sends requests to `base_url` instead of the environment's URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Performs the login
    pub async fn login(self) -> Result<Session, AppError> {
        let Some(credential) = self.credential else {
            return Err(AppError::InvalidInput(
                "either a password or a remember token is required".to_string(),
            ));
        };
        let environment = Environment::from_is_test(self.options.is_test);
        let auth = match self.base_url {
            Some(url) => TastytradeAuth::with_base_url(environment, url)?,
            None => TastytradeAuth::new(environment)?,
        };
        Session::login_with(&auth, self.username, credential, self.options).await
    }
}
