//! Diagnostics for the tool itself (not the child's stream).
//!
//! Filter comes from STDERRED_LOG (EnvFilter syntax), default `warn`. Output is
//! plain text on stderr so it never carries the painter's escape codes.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "STDERRED_LOG";

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once; later calls are no-ops.
pub fn logging_init(verbose: bool) {
    INIT.get_or_init(|| {
        let default = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
}
