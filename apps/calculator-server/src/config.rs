//! Layered server configuration
//!
//! Sources, lowest to highest precedence: built-in defaults, the YAML file
//! given with `--config`, `CALC__*` environment variables (`__` separates
//! nesting levels, e.g. `CALC__SERVER__PORT=8080`), then CLI overrides.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use calculator::ServiceConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "CALC__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calculator: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Path the calculator routes are nested under; empty mounts them at the root.
    pub api_prefix: String,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
    pub cors_enabled: bool,
    /// `"*"` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 5000,
            api_prefix: "/api/calculator".to_owned(),
            request_timeout_secs: 30,
            body_limit_bytes: 64 * 1024,
            cors_enabled: true,
            cors_allowed_origins: vec!["*".to_owned()],
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns an error if `bind_addr` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prefix without a trailing slash; `""` when routes sit at the root.
    #[must_use]
    pub fn normalized_prefix(&self) -> &str {
        self.api_prefix.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,tower_http=info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `CALC__*` env vars.
    ///
    /// # Errors
    /// Returns an error if an explicit config file is missing, a source
    /// cannot be parsed, or the merged configuration is invalid.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment
            .extract()
            .context("failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;

        let prefix = &self.server.api_prefix;
        ensure!(
            prefix.is_empty() || prefix.starts_with('/'),
            "server.api_prefix must start with '/': {prefix:?}"
        );
        ensure!(
            self.server.request_timeout_secs > 0,
            "server.request_timeout_secs must be positive"
        );
        ensure!(
            self.server.body_limit_bytes > 0,
            "server.body_limit_bytes must be positive"
        );

        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid logging.level '{}'", self.logging.level))?;
        Ok(())
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}
