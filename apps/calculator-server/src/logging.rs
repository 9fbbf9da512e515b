//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence; otherwise the configured level is used,
//! raised by `-v` flags on the command line.

use std::io;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

/// `logging` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

/// Filter directive for the given configuration and `-v` count.
///
/// - 0: configured level
/// - 1 (`-v`): info
/// - 2 (`-vv`): debug
/// - 3+ (`-vvv`): trace
#[must_use]
pub fn effective_level(config: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => &config.level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber writing to stderr.
///
/// # Errors
/// Returns an error if the level is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = build_env_filter(effective_level(config, verbose))?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))
}
