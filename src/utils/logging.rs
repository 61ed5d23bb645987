//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once is a no-op.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}
