//! Server configuration.
//!
//! Resolution order, lowest to highest precedence: built-in defaults, the
//! config file (TOML, or JSON when the path ends in `.json`), `AURUM_*`
//! environment variables, command-line flags.

use crate::ServerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "aurum_server=info,aurum_db=info,tower_http=debug";

/// Top-level server configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Listen address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to write through the API. Empty means read-only
    /// access from any origin.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Catalog store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON seed file loaded at startup. The store starts empty without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(ServerError::Config(format!("unknown log format: {}", other))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl ServerConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                ServerError::Config(format!("invalid JSON config {}: {}", path.display(), e))
            })
        } else {
            toml::from_str(&content).map_err(|e| {
                ServerError::Config(format!("invalid TOML config {}: {}", path.display(), e))
            })
        }
    }

    /// Apply `AURUM_HOST`, `AURUM_PORT`, `AURUM_SEED` and `AURUM_LOG_FORMAT`.
    pub fn apply_env(self) -> Result<Self, ServerError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_vars(
        mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ServerError> {
        if let Some(host) = var("AURUM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("AURUM_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid AURUM_PORT: {}", port)))?;
        }
        if let Some(seed) = var("AURUM_SEED") {
            self.store.seed_path = Some(PathBuf::from(seed));
        }
        if let Some(format) = var("AURUM_LOG_FORMAT") {
            self.log.format = format.parse()?;
        }
        Ok(self)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    pub fn with_seed(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.seed_path = Some(path.into());
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log.format = format;
        self
    }

    /// Socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ServerError::Config(format!(
                    "invalid listen address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}
