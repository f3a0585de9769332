//! Backend abstraction.
//!
//! One variant per supported database engine. The variant supplies the two
//! things the query builders need: a live connection and the positional
//! parameter placeholder syntax the engine's driver expects. Queries run on
//! the sqlx `Any` driver so a single code path serves both engines.

use std::path::PathBuf;

use sqlx::any::{AnyConnectOptions, install_default_drivers};
use sqlx::{AnyConnection, ConnectOptions};
use tracing::debug;

use crate::config::{ConfigError, DatabaseConfig};

use super::error::{DbError, DbResult};

/// The configured database engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Embedded file backend.
    Sqlite { filename: PathBuf },
    /// Client-server backend.
    Postgres {
        host: String,
        port: u16,
        database: String,
        user: String,
        password: String,
    },
}

impl Backend {
    /// Select a backend from the loaded configuration. Any identifier other
    /// than `sqlite` or `postgresql` is a configuration error, as is a
    /// missing connection parameter for the selected backend.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, ConfigError> {
        match config.kind.as_str() {
            "sqlite" => Ok(Backend::Sqlite {
                filename: config
                    .filename
                    .clone()
                    .ok_or(ConfigError::MissingParameter {
                        backend: "sqlite",
                        name: "filename",
                    })?,
            }),
            "postgresql" => {
                let missing = |name: &'static str| ConfigError::MissingParameter {
                    backend: "postgresql",
                    name,
                };
                Ok(Backend::Postgres {
                    host: config.host.clone().ok_or_else(|| missing("host"))?,
                    port: config.port.unwrap_or(5432),
                    database: config.database.clone().ok_or_else(|| missing("database"))?,
                    user: config.user.clone().ok_or_else(|| missing("user"))?,
                    password: config.password.clone().unwrap_or_default(),
                })
            }
            other => Err(ConfigError::UnsupportedBackend {
                value: other.to_string(),
            }),
        }
    }

    /// Short backend name for log events.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Sqlite { .. } => "sqlite",
            Backend::Postgres { .. } => "postgresql",
        }
    }

    /// The placeholder token for the n-th bind slot (1-based): `?` for
    /// SQLite, `$n` for PostgreSQL. This token is the only thing ever
    /// interpolated into SQL text; user values are always bound.
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Backend::Sqlite { .. } => "?".to_string(),
            Backend::Postgres { .. } => format!("${n}"),
        }
    }

    fn connection_url(&self) -> String {
        match self {
            Backend::Sqlite { filename } => {
                format!("sqlite://{}?mode=rwc", filename.display())
            }
            Backend::Postgres {
                host,
                port,
                database,
                user,
                password,
            } => format!("postgres://{user}:{password}@{host}:{port}/{database}"),
        }
    }

    /// Open a fresh connection. Every operation opens its own connection and
    /// drops it when done; there is no pooling, reuse, or retry. SQLite ships
    /// with foreign-key enforcement off, so it is enabled here on every new
    /// connection.
    pub async fn connect(&self) -> DbResult<AnyConnection> {
        install_default_drivers();

        let options: AnyConnectOptions =
            self.connection_url()
                .parse()
                .map_err(|e: sqlx::Error| DbError::Connection {
                    message: e.to_string(),
                })?;
        let mut conn = options.connect().await.map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;

        if matches!(self, Backend::Sqlite { .. }) {
            sqlx::raw_sql("PRAGMA foreign_keys = ON")
                .execute(&mut conn)
                .await
                .map_err(|e| DbError::Connection {
                    message: e.to_string(),
                })?;
        }

        debug!(backend = self.name(), "opened database connection");
        Ok(conn)
    }
}
