//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `relayd.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use relaypanel_adapter_virtual::VirtualConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated relay bank settings.
    pub relays: VirtualConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory holding the dashboard bundle, served at `/`.
    pub static_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `relayd.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("relayd.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply `RELAYD_*` overrides read through `var`.
    ///
    /// `RELAYD_BIND` wins over `RELAYD_HOST`/`RELAYD_PORT`, and `RUST_LOG`
    /// wins over `RELAYD_LOG`. Unparsable ports are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let server = &mut self.server;
        if let Some(host) = var("RELAYD_HOST") {
            server.host = host;
        }
        if let Some(port) = var("RELAYD_PORT").and_then(|port| port.parse().ok()) {
            server.port = port;
        }
        if let Some((host, port)) = var("RELAYD_BIND")
            .as_deref()
            .and_then(|bind| bind.rsplit_once(':'))
        {
            server.host = host.to_string();
            if let Ok(port) = port.parse() {
                server.port = port;
            }
        }
        if let Some(dir) = var("RELAYD_STATIC_DIR") {
            server.static_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("RELAYD_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: Some(PathBuf::from("static")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "relayd=info,relaypanel=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
