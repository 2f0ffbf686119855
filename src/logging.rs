//! Tracing setup for the one-shot commands.
//!
//! Logs go to stderr so stdout stays clean for tables and `--json` output.
//! The filter comes from `RUST_LOG` (default `warn`). The TUI never installs a
//! subscriber: anything written to stderr would tear the alternate screen.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber. Repeated calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
