//! Configuration loading and management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "GRUBDASH_CONFIG";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

/// Configuration file read when [`CONFIG_ENV`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/grubdash.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid PORT override '{0}'")]
    InvalidPort(String),

    #[error("configuration rejected: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,

    /// Answer cross-origin requests from any origin
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors: true,
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,

    /// YAML fixture loaded into the stores at startup
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the process configuration.
    ///
    /// The file named by `GRUBDASH_CONFIG` wins, then `config/grubdash.yaml`
    /// when present, then the defaults. `PORT` overrides the port last.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let port = std::env::var(PORT_ENV).ok();
        Self::resolve(explicit, Path::new(DEFAULT_CONFIG_PATH), port.as_deref())
    }

    /// [`AppConfig::load`] with its inputs made explicit
    pub fn resolve(
        explicit: Option<PathBuf>,
        fallback: &Path,
        port: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_yaml_file(path)?,
            None if fallback.is_file() => Self::from_yaml_file(fallback)?,
            None => Self::default(),
        };

        if let Some(port) = port {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }
}
