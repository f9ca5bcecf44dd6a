//! Configuration management for cardhook
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use cardhook::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `CARDHOOK__<section>__<key>`
//!
//! Examples:
//! - `CARDHOOK__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `CARDHOOK__BOARD__BASE_URL=https://api.trello.com/1/`
//!
//! Board credentials are only read from `KEY` and `TOKEN`
//! (or `TRELLO_KEY` / `TRELLO_TOKEN`).
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/cardhook.toml`.
//! This can be overridden using the `CARDHOOK_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{
    BoardConfig, Config, DEFAULT_BASE_URL, DEFAULT_HANDSHAKE_MESSAGE, ServerConfig,
    WebhookConfig,
};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`CARDHOOK__*`, `KEY`, `TOKEN`)
    /// 2. TOML file (default: `config/cardhook.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path, without board secrets
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
