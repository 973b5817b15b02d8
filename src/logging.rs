//! Logging setup
//!
//! Events go to stderr so they never mix with the summary line on stdout.
//! `RUST_LOG` takes precedence over the `--verbose` flag.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "bundleme=debug"
    } else {
        "bundleme=warn"
    }
}

/// Install the global tracing subscriber
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .try_init();
}
