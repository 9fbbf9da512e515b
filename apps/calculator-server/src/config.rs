//! Layered application configuration.
//!
//! Sources are merged in order: built-in defaults, the YAML file given with
//! `--config`, `APP__*` environment variables (`__` separates nesting
//! levels, e.g. `APP__SERVER__BIND_ADDR`), then CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use calculator::CalculatorConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "APP__";

/// Whole application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            body_limit_bytes: default_body_limit_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_enabled: false,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:5001".to_owned()
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl ServerConfig {
    /// Parsed bind address.
    ///
    /// # Errors
    /// Returns an error if `bind_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file and the
    /// environment.
    ///
    /// The result is not validated; call [`AppConfig::validate`] once CLI
    /// overrides have been applied.
    ///
    /// # Errors
    /// Returns an error if a source cannot be parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().context("failed to parse configuration")
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or(self.server.bind_addr.as_str(), |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        anyhow::ensure!(
            self.server.body_limit_bytes > 0,
            "server.body_limit_bytes must be positive"
        );
        anyhow::ensure!(
            self.server.request_timeout_secs > 0,
            "server.request_timeout_secs must be positive"
        );
        self.calculator
            .validate()
            .context("invalid calculator configuration")?;
        Ok(())
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to serialize configuration")
    }
}
