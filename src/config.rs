/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client configuration loaded from the environment
//!
//! Variables (a `.env` file in the working directory is honoured):
//! - `TT_IS_TEST` - use the sandbox environment and its credentials
//! - `TT_USERNAME` / `TT_PASSWORD` - production credentials
//! - `TT_USERNAME_SANDBOX` / `TT_PASSWORD_SANDBOX` - sandbox credentials
//! - `TT_REMEMBER_TOKEN` - remember token used when no password is set
//! - `TT_REMEMBER_ME` - request a remember token at login
//! - `TT_BASE_URL` - override of the REST base URL
//! - `TT_TIMEOUT` - request timeout in seconds

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::AppError;
use crate::session::interface::{Credential, Environment};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use crate::utils::secret::optional_secret_string;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Tastytrade API
pub struct Credentials {
    /// Username or email
    pub username: String,
    /// Account password
    #[serde(default, with = "optional_secret_string")]
    pub password: Option<SecretString>,
    /// Remember token from an earlier login
    #[serde(default, with = "optional_secret_string")]
    pub remember_token: Option<SecretString>,
}

impl Credentials {
    /// Picks the credential to log in with, preferring the password
    ///
    /// # Returns
    /// * `Ok(Credential)` - The password, or the remember token when no password is set
    /// * `Err(AppError::InvalidInput)` - If neither is configured
    pub fn credential(&self) -> Result<Credential, AppError> {
        match (&self.password, &self.remember_token) {
            (Some(p), _) if !p.expose_secret().is_empty() => {
                Ok(Credential::Password(p.clone()))
            }
            (_, Some(t)) if !t.expose_secret().is_empty() => {
                Ok(Credential::RememberToken(t.clone()))
            }
            _ => Err(AppError::InvalidInput(
                "either a password or a remember token is required".to_string(),
            )),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL override; `None` selects the URL of the environment
    pub base_url: Option<String>,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Main configuration for the Tastytrade client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Whether to use the sandbox environment
    pub is_test: bool,
    /// Whether to request a remember token at login
    pub remember_me: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from environment variables and `.env`
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let is_test = get_env_flag("TT_IS_TEST", false);
        let (user_var, password_var) = if is_test {
            ("TT_USERNAME_SANDBOX", "TT_PASSWORD_SANDBOX")
        } else {
            ("TT_USERNAME", "TT_PASSWORD")
        };

        let username = get_env_or_default(user_var, String::new());
        let password = get_env_or_none::<String>(password_var).map(SecretString::from);
        let remember_token = get_env_or_none::<String>("TT_REMEMBER_TOKEN").map(SecretString::from);

        if username.is_empty() {
            error!("{} not found in environment variables or .env file", user_var);
        }
        if password.is_none() && remember_token.is_none() {
            error!(
                "Neither {} nor TT_REMEMBER_TOKEN found in environment variables or .env file",
                password_var
            );
        }

        let mut timeout = get_env_or_default("TT_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            error!(
                "TT_TIMEOUT must be greater than 0, using default: {}",
                DEFAULT_TIMEOUT_SECS
            );
            timeout = DEFAULT_TIMEOUT_SECS;
        }

        Config {
            credentials: Credentials {
                username,
                password,
                remember_token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_none("TT_BASE_URL"),
                timeout,
            },
            is_test,
            remember_me: get_env_flag("TT_REMEMBER_ME", false),
        }
    }

    /// Environment selected by `is_test`
    #[must_use]
    pub fn environment(&self) -> Environment {
        Environment::from_is_test(self.is_test)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> String {
        self.rest_api
            .base_url
            .clone()
            .unwrap_or_else(|| self.environment().base_url().to_string())
    }
}
