/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Tastytrade Client
//!
//! Authenticated sessions for the Tastytrade brokerage API.
//!
//! A session is created by exchanging a username and either a password or a
//! remember token for a session token. Sessions can target the production
//! API or the certification sandbox, and can optionally request a remember
//! token (valid for 28 days) that replaces the password on later logins.
//!
//! ## Example
//!
//! ```ignore
//! use tastytrade_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     let session = Session::login(
//!         "trader1",
//!         Credential::password("correct-password"),
//!         SessionOptions { is_test: true, remember_me: true, ..Default::default() },
//!     )
//!     .await?;
//!
//!     info!("Logged in as {}", session.user().username);
//!
//!     if let Some(token) = session.remember_token() {
//!         let again = Session::builder("trader1")
//!             .remember_token(token.expose_secret())
//!             .is_test(true)
//!             .login()
//!             .await?;
//!         again.destroy().await?;
//!     }
//!     Ok(())
//! }
//! ```

/// Session creation, validation, renewal and logout
pub mod auth;
/// Configuration loaded from environment variables
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Response validation and API error bodies
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Authenticator seam and wire types
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
