//! Structured logging initialization.
//!
//! Service methods log through `tracing` macros; a hosting binary calls
//! [`init_tracing`] once at startup to install the subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::server::Environment;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, falling back to the
/// configured log level. Production emits JSON lines; everything else gets
/// the human-readable format.
pub fn init_tracing(log_level: &str, environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    if *environment == Environment::Production {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}
