//! Logging setup for the `rpsls` binary.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! game itself. The default filter is `warn`, override with `RUST_LOG`
//! (for example `RUST_LOG=rpsls_ai=debug` to watch the opponent reason).

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::warn!("logging initialised");
    }
}
