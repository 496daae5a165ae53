/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Serde helpers for secret fields
pub mod secret;

pub use config::*;
pub use logger::*;
