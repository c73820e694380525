//! Diagnostic logging to stderr.
//!
//! Status lines for the user go through `ui::messages`; this is for
//! tracing the store and lock lifecycle, e.g. `PUNCH_LOG=debug punch -i`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PUNCH_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a subscriber may already be installed when running under tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
