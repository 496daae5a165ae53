/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, treating unset and blank values alike
fn non_empty_var(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is unset, blank or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match non_empty_var(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}: {:?}, using default", env_var, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found, blank or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    non_empty_var(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Reads a boolean flag from the environment.
///
/// Accepts `true`/`false`, `1`/`0` and `yes`/`no` in any case. Anything else
/// falls back to `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match non_empty_var(env_var).map(|v| v.to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes") => true,
        Some(v) if matches!(v.as_str(), "false" | "0" | "no") => false,
        Some(v) => {
            error!("Failed to parse {} as a flag: {}, using default", env_var, v);
            default
        }
        None => default,
    }
}
