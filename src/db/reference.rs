//! Reference table access.
//!
//! Departments and course types are seeded once at first run and read-only
//! afterwards; the UI fetches the full lists to populate its filter and
//! selection controls.

use sqlx::Row;

use super::backend::Backend;
use super::error::{DbError, DbResult};
use super::models::{CourseType, Department};

/// Read access to the reference tables.
pub struct ReferenceStore<'a> {
    backend: &'a Backend,
}

impl<'a> ReferenceStore<'a> {
    pub fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    /// Full department list, ordered by id.
    pub async fn list_departments(&self) -> DbResult<Vec<Department>> {
        let mut conn = self.backend.connect().await?;
        let rows = sqlx::query("SELECT id, name, code FROM departments ORDER BY id")
            .fetch_all(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        rows.into_iter()
            .map(|row| {
                Ok(Department {
                    id: row.try_get("id").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    name: row.try_get("name").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    code: row.try_get("code").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                })
            })
            .collect()
    }

    /// Full course type list, ordered by id.
    pub async fn list_course_types(&self) -> DbResult<Vec<CourseType>> {
        let mut conn = self.backend.connect().await?;
        let rows = sqlx::query("SELECT id, type_name, description FROM course_types ORDER BY id")
            .fetch_all(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        rows.into_iter()
            .map(|row| {
                Ok(CourseType {
                    id: row.try_get("id").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    type_name: row.try_get("type_name").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    description: row
                        .try_get("description")
                        .map_err(|e| DbError::Database {
                            message: e.to_string(),
                        })?,
                })
            })
            .collect()
    }
}
