//! Logging initialization

use tracing_subscriber::{
    fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global subscriber
///
/// Events go to stderr so they never interleave with rendered tables on
/// stdout. `RUST_LOG` wins when set; otherwise `verbose` turns on debug
/// output for this crate and everything else stays silent.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "budget_calc=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second call keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
