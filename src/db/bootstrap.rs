//! First-run schema creation and seed data.
//!
//! Invoked once, gated by the configuration's initialized flag. The DDL
//! dialect is selected by matching on the already-validated [`Backend`]
//! variant, so no misconfigured identifier can pick the wrong script.

use tracing::info;

use super::backend::Backend;
use super::error::{DbError, DbResult};

const SQLITE_SCHEMA: &str = "
-- Department reference table
CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    code TEXT NOT NULL
);

-- Course type reference table
CREATE TABLE IF NOT EXISTS course_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type_name TEXT NOT NULL,
    description TEXT
);

-- Main course table
CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    department_id INTEGER NOT NULL,
    course_type_id INTEGER NOT NULL,
    FOREIGN KEY (department_id) REFERENCES departments(id) ON DELETE RESTRICT,
    FOREIGN KEY (course_type_id) REFERENCES course_types(id) ON DELETE RESTRICT
);
";

const POSTGRES_SCHEMA: &str = "
-- Department reference table
CREATE TABLE IF NOT EXISTS departments (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    code VARCHAR(5) NOT NULL
);

-- Course type reference table
CREATE TABLE IF NOT EXISTS course_types (
    id SERIAL PRIMARY KEY,
    type_name TEXT NOT NULL,
    description TEXT
);

-- Main course table
CREATE TABLE IF NOT EXISTS courses (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    department_id INT NOT NULL REFERENCES departments(id) ON DELETE RESTRICT,
    course_type_id INT NOT NULL REFERENCES course_types(id) ON DELETE RESTRICT
);
";

const SEED_DATA: &str = "
INSERT INTO departments
(name, code)
VALUES
('Mathematics', 'MATH'),
('Computer Science', 'CS'),
('Physics', 'PHYS'),
('Biology', 'BIO'),
('Engineering', 'ENG');

INSERT INTO course_types
(type_name, description)
VALUES
('Online', 'Courses taught entirely online'),
('Offline', 'Courses taught on campus'),
('Hybrid', 'Courses mixing online and on-campus formats'),
('Practicum', 'Hands-on training sessions'),
('Seminar', 'Small group discussions or lectures');
";

/// Create the schema and seed the reference tables (5 departments, 5 course
/// types). The caller is responsible for running this exactly once.
pub async fn initialize(backend: &Backend) -> DbResult<()> {
    let schema = match backend {
        Backend::Sqlite { .. } => SQLITE_SCHEMA,
        Backend::Postgres { .. } => POSTGRES_SCHEMA,
    };

    let mut conn = backend.connect().await?;

    sqlx::raw_sql(schema)
        .execute(&mut conn)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

    sqlx::raw_sql(SEED_DATA)
        .execute(&mut conn)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

    info!(
        backend = backend.name(),
        "created schema and seeded reference tables"
    );
    Ok(())
}
