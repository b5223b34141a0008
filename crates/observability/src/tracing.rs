//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global fmt subscriber described by `config`.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// nothing changes.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        if let Some(rejected) = &config.rejected_format {
            ::tracing::warn!("{rejected}; using {:?}", config.format);
        }
    }
    installed
}

/// Initialize from the process environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}
