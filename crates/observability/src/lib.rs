//! Tracing/logging setup for processes hosting the ledger.

/// Environment-driven settings.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide tracing from an explicit configuration.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    tracing::init_with(config)
}
