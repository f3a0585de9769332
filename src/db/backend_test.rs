//! Tests for backend selection, placeholder syntax, and connections.

use std::path::PathBuf;

use crate::config::{ConfigError, DatabaseConfig};
use crate::db::Backend;

fn sqlite_config(filename: Option<&str>) -> DatabaseConfig {
    DatabaseConfig {
        kind: "sqlite".to_string(),
        filename: filename.map(PathBuf::from),
        host: None,
        port: None,
        database: None,
        user: None,
        password: None,
    }
}

fn postgres_config() -> DatabaseConfig {
    DatabaseConfig {
        kind: "postgresql".to_string(),
        filename: None,
        host: Some("localhost".to_string()),
        port: None,
        database: Some("coursecat".to_string()),
        user: Some("coursecat".to_string()),
        password: Some("secret".to_string()),
    }
}

#[test]
fn sqlite_placeholder_is_question_mark() {
    let backend = Backend::Sqlite {
        filename: PathBuf::from("catalog.db"),
    };
    assert_eq!(backend.placeholder(1), "?");
    assert_eq!(backend.placeholder(5), "?");
}

#[test]
fn postgres_placeholders_are_numbered() {
    let backend = Backend::from_config(&postgres_config()).expect("Config should be valid");
    assert_eq!(backend.placeholder(1), "$1");
    assert_eq!(backend.placeholder(3), "$3");
}

#[test]
fn from_config_selects_sqlite() {
    let backend =
        Backend::from_config(&sqlite_config(Some("catalog.db"))).expect("Config should be valid");
    assert_eq!(
        backend,
        Backend::Sqlite {
            filename: PathBuf::from("catalog.db"),
        }
    );
}

#[test]
fn from_config_defaults_postgres_port() {
    let backend = Backend::from_config(&postgres_config()).expect("Config should be valid");
    match backend {
        Backend::Postgres { port, host, .. } => {
            assert_eq!(port, 5432);
            assert_eq!(host, "localhost");
        }
        other => panic!("Expected postgres backend, got {other:?}"),
    }
}

#[test]
fn from_config_rejects_unknown_backend() {
    let mut config = sqlite_config(Some("catalog.db"));
    config.kind = "mysql".to_string();

    let result = Backend::from_config(&config);
    assert!(matches!(
        result,
        Err(ConfigError::UnsupportedBackend { value }) if value == "mysql"
    ));
}

#[test]
fn from_config_requires_sqlite_filename() {
    let result = Backend::from_config(&sqlite_config(None));
    assert!(matches!(
        result,
        Err(ConfigError::MissingParameter {
            name: "filename",
            ..
        })
    ));
}

#[test]
fn from_config_requires_postgres_host() {
    let mut config = postgres_config();
    config.host = None;

    let result = Backend::from_config(&config);
    assert!(matches!(
        result,
        Err(ConfigError::MissingParameter { name: "host", .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn sqlite_connection_enforces_foreign_keys() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let backend = Backend::Sqlite {
        filename: dir.path().join("catalog.db"),
    };

    let mut conn = backend.connect().await.expect("Connect should succeed");
    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&mut conn)
        .await
        .expect("Pragma query should succeed");

    assert_eq!(enabled, 1, "foreign_keys pragma should be on");
}
