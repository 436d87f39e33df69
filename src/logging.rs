//! Diagnostic logging to stderr.
//!
//! Logging is off unless `FZF_PREVIEW_LOG` or `[logging] level` enables it,
//! since anything on stderr shows up in the preview pane.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter directive.
pub const ENV_LOG: &str = "FZF_PREVIEW_LOG";

/// Install the global subscriber.
///
/// `FZF_PREVIEW_LOG` wins over `default_level`. Calling this twice is harmless.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    // A second call finds a subscriber already set and keeps it.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .ok();
}
