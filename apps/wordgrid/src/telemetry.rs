use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs a global structured-logging subscriber.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `config.rust_log`.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback_directive(config))),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Filter directive used when `RUST_LOG` is unset: this crate only, at `config.rust_log`.
fn fallback_directive(config: &Config) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME"), config.rust_log)
}
