//! Configuration module
//!
//! Settings come from a TOML file (default:
//! `~/.config/reserva/config.toml`); every section falls back to sane
//! defaults when missing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite database file path
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_path() -> String {
    "./reserva.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Default config file location (`~/.config/reserva/config.toml`).
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reserva")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_missing() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.database.connection_url(), "sqlite://./reserva.db?mode=rwc");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_override() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 3000

            [database]
            path = "/var/lib/reserva/reserva.db"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(
            cfg.database.connection_url(),
            "sqlite:///var/lib/reserva/reserva.db?mode=rwc"
        );
    }
}
