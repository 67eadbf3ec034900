// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "XWC_LOG";

/// Installs a stderr subscriber. `log` records from the library crates are
/// forwarded to it.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // Fails only when a global subscriber is already installed; keep that one.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        log::trace!("log subscriber already installed");
    }
}
