//! Logging initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level
    Development,
    /// JSON structured output, info level
    Production,
    /// No output; tests install the capture layer instead
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup. Later calls are ignored. `RUST_LOG` overrides the
/// profile's default filter.
///
/// ```
/// use rollcall_core::logging_facility::{init, Profile};
///
/// init(Profile::Test);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        // try_init: a subscriber may already be installed by test capture
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("rollcall=debug")),
                )
                .with_writer(std::io::stderr)
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("rollcall=info")),
                )
                .with_writer(std::io::stderr)
                .try_init(),
            Profile::Test => tracing_subscriber::registry()
                .try_init()
                .map_err(Into::into),
        };
    });
}
