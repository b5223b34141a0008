//! Environment-driven observability settings.

use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "WALLETLEDGER_LOG_FORMAT";

/// Environment variable holding the tracing filter directives.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
    /// Single-line text.
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format '{0}' (expected json, pretty or compact)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Tracing setup for a process hosting the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,walletledger_ledger=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when the environment named a format we do not know; reported once
    /// the subscriber is up.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in
    /// `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(LOG_FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match lookup(LOG_FORMAT_ENV) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(err) => (LogFormat::default(), Some(err)),
            },
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
