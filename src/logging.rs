//! Diagnostic output.
//!
//! Events go to stderr through a `tracing` fmt subscriber. `RUST_LOG` wins
//! when set; otherwise the level is `warn`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity setting
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "atlas_packer=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (tests, embedding callers)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init();
}
