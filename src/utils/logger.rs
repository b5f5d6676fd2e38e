/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 11/11/25
******************************************************************************/
use crate::utils::config::get_env_or_default;
use tracing::Level;

/// Initializes the global tracing subscriber
///
/// The level is taken from the `LOGLEVEL` environment variable (trace,
/// debug, info, warn, error) and defaults to info. Safe to call more than
/// once; later calls are no-ops.
pub fn setup_logger() {
    let level = get_env_or_default("LOGLEVEL", String::from("info"));
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
