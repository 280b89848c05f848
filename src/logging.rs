//! Logging setup.
//!
//! Logs go to stderr. `RUST_LOG` takes precedence; otherwise the level
//! comes from the `-v` count on the command line.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
pub fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
