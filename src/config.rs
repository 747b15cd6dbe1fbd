//! # Configuration
//!
//! Application configuration loaded from an optional JSON file with serde
//! defaults, then overridden by `AVIAREF_*` environment variables. The rest
//! of the crate consumes it through two accessors: the server bind address
//! and the database connection string.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value in {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to serve on (default: "0.0.0.0:8080")
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

/// PostgreSQL connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_user")]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_db_name")]
    pub database: String,

    /// "require" for production
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "demo".to_string()
}

fn default_sslmode() -> String {
    "disable".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            username: default_db_user(),
            password: String::new(),
            database: default_db_name(),
            sslmode: default_sslmode(),
        }
    }
}

impl DatabaseConfig {
    /// libpq keyword/value connection string for the driver.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={}",
            self.host, self.port, self.username, self.password, self.database, self.sslmode
        )
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads configuration from the given file if present, otherwise starts
    /// from defaults; environment overrides apply in both cases.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(addr) = env::var("AVIAREF_ADDR") {
            self.server.addr = addr;
        }
        if let Ok(host) = env::var("AVIAREF_DB_HOST") {
            self.database.host = host;
        }
        if let Ok(port) = env::var("AVIAREF_DB_PORT") {
            self.database.port =
                port.parse()
                    .map_err(|_| ConfigError::InvalidEnv {
                        var: "AVIAREF_DB_PORT",
                        value: port,
                    })?;
        }
        if let Ok(user) = env::var("AVIAREF_DB_USER") {
            self.database.username = user;
        }
        if let Ok(password) = env::var("AVIAREF_DB_PASSWORD") {
            self.database.password = password;
        }
        if let Ok(name) = env::var("AVIAREF_DB_NAME") {
            self.database.database = name;
        }
        if let Ok(sslmode) = env::var("AVIAREF_DB_SSLMODE") {
            self.database.sslmode = sslmode;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.sslmode, "disable");
    }

    #[test]
    fn test_connection_string_format() {
        let config = DatabaseConfig {
            host: "db.local".to_string(),
            port: 5433,
            username: "app".to_string(),
            password: "secret".to_string(),
            database: "demo".to_string(),
            sslmode: "require".to_string(),
        };
        assert_eq!(
            config.connection_string(),
            "host=db.local port=5433 user=app password=secret dbname=demo sslmode=require"
        );
    }

    #[test]
    fn test_load_from_file_with_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"server": {{"addr": "127.0.0.1:9000"}}, "database": {{"host": "pg"}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.database.host, "pg");
        // Unspecified keys fall back to defaults.
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(ConfigError::Parse(_))
        ));
    }
}
