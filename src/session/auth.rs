// Authentication module for the Tastytrade API

use crate::config::Config;
use crate::constants::{
    DEFAULT_TIMEOUT_SECS, OTP_HEADER, SESSIONS_PATH, SESSIONS_VALIDATE_PATH, USER_AGENT,
};
use crate::error::AppError;
use crate::model::http::{classify_error, validate_and_parse, validate_response};
use crate::session::interface::{Authenticator, Environment};
use crate::session::response::{LoginRequest, LoginResponse};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// HTTP authenticator for the Tastytrade sessions resource
#[derive(Debug, Clone)]
pub struct TastytradeAuth {
    environment: Environment,
    base_url: String,
    http: Client,
    timeout: Duration,
}

impl TastytradeAuth {
    /// Creates an authenticator for the given environment
    ///
    /// # Arguments
    /// * `environment` - Selects the production or sandbox base URL
    ///
    /// # Returns
    /// * `Ok(TastytradeAuth)` - Ready to send requests
    /// * `Err(AppError::Network)` - If the HTTP client cannot be built
    pub fn new(environment: Environment) -> Result<Self, AppError> {
        Self::build(
            environment,
            environment.base_url().to_string(),
            DEFAULT_TIMEOUT_SECS,
        )
    }

    /// Creates an authenticator from a [`Config`], honouring its base URL override and timeout
    pub fn from_config(cfg: &Config) -> Result<Self, AppError> {
        Self::build(cfg.environment(), cfg.base_url(), cfg.rest_api.timeout)
    }

    /// Creates an authenticator that sends requests to `base_url`.
    ///
    /// `environment` is still recorded on every session created through it.
    pub fn with_base_url(
        environment: Environment,
        base_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::build(environment, base_url.into(), DEFAULT_TIMEOUT_SECS)
    }

    fn build(environment: Environment, base_url: String, timeout: u64) -> Result<Self, AppError> {
        let timeout = if timeout == 0 {
            error!(
                "Timeout of 0 seconds rejected, using default: {}",
                DEFAULT_TIMEOUT_SECS
            );
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(timeout)
        };
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            environment,
            base_url,
            http,
            timeout,
        })
    }

    /// Timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Authenticator for TastytradeAuth {
    fn environment(&self) -> Environment {
        self.environment
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn create_session(
        &self,
        request: &LoginRequest,
        otp: Option<&SecretString>,
    ) -> Result<LoginResponse, AppError> {
        let url = self.rest_url(SESSIONS_PATH);
        debug!("Sending login request for {} to: {}", request.login, url);

        let mut builder = self.http.post(&url).json(request);
        if let Some(code) = otp {
            builder = builder.header(OTP_HEADER, code.expose_secret());
        }

        let response = builder.send().await?;
        let login: LoginResponse = validate_and_parse(response).await?;

        if login.session_token.expose_secret().is_empty() {
            return Err(AppError::Deserialization(
                "session token missing from login response".to_string(),
            ));
        }

        info!(
            "Created {} session for {}",
            self.environment, login.user.username
        );
        Ok(login)
    }

    async fn validate_session(&self, session_token: &SecretString) -> Result<bool, AppError> {
        let url = self.rest_url(SESSIONS_VALIDATE_PATH);
        debug!("Validating session at: {}", url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, session_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        if status == StatusCode::UNAUTHORIZED {
            warn!("Session token no longer accepted");
            return Ok(false);
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_error(status, &body))
    }

    async fn destroy_session(&self, session_token: &SecretString) -> Result<(), AppError> {
        let url = self.rest_url(SESSIONS_PATH);
        debug!("Destroying session at: {}", url);

        let response = self
            .http
            .delete(&url)
            .header(AUTHORIZATION, session_token.expose_secret())
            .send()
            .await?;

        validate_response(response).await?;
        info!("Session destroyed");
        Ok(())
    }
}
