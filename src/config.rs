//! Application configuration.
//!
//! The configuration is loaded once at startup from a TOML file and passed
//! explicitly to the backend abstraction and the bootstrap routine. There is
//! no process-wide config singleton.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors. All of these are fatal at startup.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    #[diagnostic(
        code(coursecat::config::read),
        help("Create one from config.example.toml and pass it via --config.")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    #[diagnostic(code(coursecat::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    #[diagnostic(code(coursecat::config::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {source}")]
    #[diagnostic(code(coursecat::config::serialize))]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Unsupported database type '{value}'")]
    #[diagnostic(
        code(coursecat::config::unsupported_backend),
        help("Supported values are 'sqlite' and 'postgresql'.")
    )]
    UnsupportedBackend { value: String },

    #[error("Missing database parameter '{name}' for the {backend} backend")]
    #[diagnostic(code(coursecat::config::missing_parameter))]
    MissingParameter {
        backend: &'static str,
        name: &'static str,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub app: AppSection,
}

/// Database connection parameters. Which fields are required depends on the
/// selected backend type; `Backend::from_config` validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Backend identifier: "sqlite" or "postgresql".
    #[serde(rename = "type")]
    pub kind: String,

    /// Database file path (sqlite).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Application state section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSection {
    /// Set to true after the first-run bootstrap has created the schema and
    /// seeded the reference tables.
    #[serde(default)]
    pub initialized: bool,
}

impl AppConfig {
    /// Load the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the configuration back to disk. Used to persist the
    /// initialized flag after the first-run bootstrap.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let raw =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize { source: e })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sqlite_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            type = "sqlite"
            filename = "catalog.db"
            "#,
        )
        .expect("Parse should succeed");

        assert_eq!(config.database.kind, "sqlite");
        assert_eq!(
            config.database.filename,
            Some(PathBuf::from("catalog.db"))
        );
        // Missing [app] section defaults to uninitialized
        assert!(!config.app.initialized);
    }

    #[test]
    fn parse_postgresql_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            type = "postgresql"
            host = "localhost"
            port = 5432
            database = "coursecat"
            user = "coursecat"
            password = "secret"

            [app]
            initialized = true
            "#,
        )
        .expect("Parse should succeed");

        assert_eq!(config.database.kind, "postgresql");
        assert_eq!(config.database.port, Some(5432));
        assert!(config.app.initialized);
    }

    #[test]
    fn save_persists_initialized_flag() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");

        let mut config: AppConfig = toml::from_str(
            r#"
            [database]
            type = "sqlite"
            filename = "catalog.db"
            "#,
        )
        .expect("Parse should succeed");

        config.app.initialized = true;
        config.save(&path).expect("Save should succeed");

        let reloaded = AppConfig::load(&path).expect("Load should succeed");
        assert!(reloaded.app.initialized);
        assert_eq!(reloaded.database.kind, "sqlite");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let result = AppConfig::load("/nonexistent/config.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
