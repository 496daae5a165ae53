/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Tastytrade Client Prelude
//!
//! Imports the types needed to create and use a session.
//!
//! ```rust
//! use tastytrade_client::prelude::*;
//!
//! let options = SessionOptions { is_test: true, ..Default::default() };
//! assert_eq!(Environment::from_is_test(options.is_test), Environment::Sandbox);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Tastytrade client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Session and its builder
pub use crate::auth::{Session, SessionBuilder, SessionOptions};

/// HTTP authenticator
pub use crate::session::auth::TastytradeAuth;

/// Authenticator trait, environments and credentials
pub use crate::session::interface::{Authenticator, Credential, Environment};

/// Wire types of the sessions resource
pub use crate::session::response::{LoginRequest, LoginResponse, User};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export secrecy for reading tokens held by a session
pub use secrecy::{ExposeSecret, SecretString};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
