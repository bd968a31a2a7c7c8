pub mod config_loader;
pub mod types;

pub use config_loader::{load_config, ConfigSource};
pub use types::{Config, CorsConfig, LoggingConfig, ServerConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}
