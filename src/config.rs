//! Configuration module for doorkeep.

use serde::Deserialize;
use std::path::Path;

use crate::{AppError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/doorkeep.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret used to sign session tokens (must be set).
    #[serde(default)]
    pub secret: String,
    /// Session token lifetime in seconds.
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
}

fn default_session_ttl() -> u64 {
    crate::auth::DEFAULT_SESSION_TTL_SECS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            ttl_secs: default_session_ttl(),
        }
    }
}

/// Download configuration.
///
/// The downloadable file is fixed at deployment; the path is never
/// taken from the request.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    /// Path to the file served by `/download`.
    #[serde(default = "default_download_path")]
    pub path: String,
}

fn default_download_path() -> String {
    "static/files/cheat_sheet.pdf".to_string()
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            path: default_download_path(),
        }
    }
}

/// Registration configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Maximum stored length of the display name.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

fn default_max_name_length() -> usize {
    1000
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/doorkeep.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Download configuration.
    #[serde(default)]
    pub download: DownloadConfig,
    /// Registration configuration.
    #[serde(default)]
    pub registration: RegistrationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(AppError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| AppError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DOORKEEP_SESSION_SECRET`: Override the session signing secret
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var("DOORKEEP_SESSION_SECRET") {
            if !secret.is_empty() {
                self.session.secret = secret;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the session secret is not set.
    pub fn validate(&self) -> Result<()> {
        if self.session.secret.is_empty() {
            return Err(AppError::Validation(
                "session secret is not set. \
                 Set it in config.toml or via DOORKEEP_SESSION_SECRET environment variable."
                    .to_string(),
            ));
        }
        Ok(())
    }
}
