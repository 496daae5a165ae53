/// HTTP implementation of [`interface::Authenticator`]
pub mod auth;
/// Environments, credentials and the authenticator trait
pub mod interface;
/// Wire types of the sessions resource
pub mod response;
