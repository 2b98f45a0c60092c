//! Subscriber setup. The library logs through `log`; the subscriber's
//! log bridge picks those records up.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV_VAR: &str = "APEX_LOG";

pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("logger already initialized: {e}");
    }
    log::debug!("logger initialized");
}
