/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Response validation shared by every request to the Tastytrade API

use crate::constants::AUTH_ERROR_CODES;
use crate::error::AppError;
use crate::model::responses::ErrorEnvelope;
use crate::session::response::ApiResponse;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Summary of an error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedError {
    /// Error codes found in the body
    pub codes: Vec<String>,
    /// Message suitable for showing to a user
    pub message: String,
}

/// Extracts codes and a readable message from an error body.
///
/// Bodies that are not JSON, or lack an `error` object, are reported verbatim.
pub fn parse_error_body(body: &str) -> ParsedError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: Some(err) }) => ParsedError {
            codes: err.codes().into_iter().map(String::from).collect(),
            message: err.render(),
        },
        _ => ParsedError {
            codes: Vec::new(),
            message: format!("Couldn't parse response: {body}"),
        },
    }
}

/// Maps a non-success status and its body to an [`AppError`]
pub fn classify_error(status: StatusCode, body: &str) -> AppError {
    let parsed = parse_error_body(body);
    let auth_code = parsed
        .codes
        .iter()
        .any(|c| AUTH_ERROR_CODES.contains(&c.as_str()));

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || auth_code {
        warn!("Authentication rejected with status {}: {}", status, parsed.message);
        AppError::Authentication(parsed.message)
    } else {
        error!("Request failed with status {}: {}", status, parsed.message);
        AppError::Api {
            status,
            message: parsed.message,
        }
    }
}

/// Passes successful responses through and converts the rest into errors
pub async fn validate_response(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_error(status, &body))
}

/// Decodes the `data` member of an API envelope
pub fn parse_data<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let envelope: ApiResponse<T> = serde_json::from_str(body).map_err(|e| {
        AppError::Deserialization(format!("Couldn't parse response: {e}: {body}"))
    })?;
    envelope
        .data
        .ok_or_else(|| AppError::Deserialization(format!("No data present in response: {body}")))
}

/// Validates a response and decodes the `data` member of its body
pub async fn validate_and_parse<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let response = validate_response(response).await?;
    let body = response.text().await?;
    parse_data(&body)
}
