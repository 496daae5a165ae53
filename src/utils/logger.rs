use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber.
///
/// The level is read from `LOGLEVEL` (`ERROR`, `WARN`, `INFO`, `DEBUG`,
/// `TRACE`) and defaults to `INFO`. Calling it more than once is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string());
        let level = parse_level(&log_level);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/// Maps a `LOGLEVEL` value to a tracing level, defaulting to `INFO`
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}
