//! # Logging Bootstrap
//!
//! Console logging setup for binaries and tests embedding the resolution
//! core. Library code only emits `tracing` events; installing a subscriber
//! stays the embedder's choice, and this helper is tolerant of a subscriber
//! that is already in place.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging, honoring `VISTA_LOG_LEVEL` (default `info`).
///
/// Safe to call repeatedly and from concurrent tests; only the first call
/// installs a subscriber, and an embedder's existing subscriber is left
/// untouched.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = std::env::var("VISTA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let subscriber = fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .with_level(true)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // A global subscriber is already installed; keep it.
            tracing::debug!("Global tracing subscriber already initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
    }
}
