/// Base URL of the production Tastytrade API
pub const API_URL: &str = "https://api.tastyworks.com";
/// Base URL of the certification (sandbox) Tastytrade API
pub const CERT_URL: &str = "https://api.cert.tastyworks.com";
/// Path of the sessions resource, relative to the base URL
pub const SESSIONS_PATH: &str = "sessions";
/// Path used to check whether a session token is still accepted
pub const SESSIONS_VALIDATE_PATH: &str = "sessions/validate";
/// Header carrying a one-time password for accounts with two-factor authentication
pub const OTP_HEADER: &str = "X-Tastyworks-OTP";
/// User agent string used in HTTP requests to identify this client to the Tastytrade API
pub const USER_AGENT: &str = concat!("tastytrade-client/", env!("CARGO_PKG_VERSION"));
/// Number of days a remember token stays valid after it is issued.
///
/// The API enforces this window; the client only uses it to report an
/// advisory expiry.
pub const REMEMBER_TOKEN_VALIDITY_DAYS: i64 = 28;
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Error codes the API uses when it rejects credentials or tokens
pub const AUTH_ERROR_CODES: &[&str] = &[
    "invalid_credentials",
    "invalid_remember_token",
    "remember_token_expired",
    "session_expired",
    "unauthorized",
];
