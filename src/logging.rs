//! Console logging setup
//!
//! Diagnostics go through the `log` facade and are written to stderr by
//! env_logger, so they never interleave with the report on stdout.
//! Set `RUST_LOG=debug` to see load and filter details.

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger. Call once at startup.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .init();
}
