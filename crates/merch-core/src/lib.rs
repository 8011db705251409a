use thiserror::Error;

mod app_config;
mod catalog;
mod config;
mod products;

pub use app_config::{AppConfig, Environment};
pub use catalog::{default_catalog, load_catalog, CatalogFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::Product;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),
    #[error("catalog validation failed: {0}")]
    Validation(String),
}
