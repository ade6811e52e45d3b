//! Diagnostic logging via `tracing`, written to stderr.

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "SHOTLOG_LOG";

/// Install the global subscriber. `SHOTLOG_LOG` takes EnvFilter directives;
/// `verbose` forces `debug`. Defaults to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a second init (tests calling run twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
