// Diagnostic logging via `tracing`.
//
// Operator-facing progress is printed by the binaries; this subscriber only
// carries library diagnostics to stderr.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `shared=debug`
pub const LOG_ENV: &str = "ARTICLE_WRITER_LOG";

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
