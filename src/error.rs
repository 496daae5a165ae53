/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types returned by the Tastytrade client

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Credentials or remember token rejected by the API
    Authentication(String),
    /// Transport level failure (connection, timeout, TLS)
    Network(reqwest::Error),
    /// Non-success response that is not an authentication failure
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Message extracted from the error envelope
        message: String,
    },
    /// Response body missing required data
    Deserialization(String),
    /// JSON encoding or decoding error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
    /// Input rejected before any request was sent
    InvalidInput(String),
}

impl AppError {
    /// Returns `true` when the API rejected the supplied credentials
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }

    /// Returns `true` for network failures and malformed responses
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Deserialization(_) | AppError::Json(_)
        )
    }

    /// HTTP status attached to the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(msg) => write!(f, "authentication failed: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Api { status, message } => {
                write!(f, "api error ({status}): {message}")
            }
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Deserialization(e.to_string())
        } else {
            AppError::Network(e)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
