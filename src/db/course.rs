//! Course data access.
//!
//! All statements are built with the backend's placeholder token and bound
//! parameters; user values never appear in SQL text. Each operation opens a
//! fresh connection, executes a single statement, and drops the connection.

use sqlx::Row;
use tracing::debug;

use super::backend::Backend;
use super::error::{DbError, DbResult};
use super::models::{CourseDetails, CourseFilter, CourseSummary, NewCourse};

const LIST_COLUMNS: &str =
    "courses.id, courses.name, departments.code, course_types.type_name";

const COURSE_JOINS: &str = "FROM courses \
     JOIN departments ON departments.id = courses.department_id \
     JOIN course_types ON course_types.id = courses.course_type_id";

/// Data access for the courses table.
pub struct CourseStore<'a> {
    backend: &'a Backend,
}

impl<'a> CourseStore<'a> {
    pub fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    /// Build the conjunctive WHERE clause for a filter. Returns the clause
    /// (empty when unfiltered) and the number of placeholders it consumed.
    fn filter_clause(&self, filter: &CourseFilter) -> (String, usize) {
        let mut conditions: Vec<String> = vec![];
        let mut n = 0;

        if filter.course_type_id.is_some() {
            n += 1;
            conditions.push(format!(
                "courses.course_type_id = {}",
                self.backend.placeholder(n)
            ));
        }

        if filter.department_id.is_some() {
            n += 1;
            conditions.push(format!(
                "courses.department_id = {}",
                self.backend.placeholder(n)
            ));
        }

        if filter.search.is_some() {
            n += 1;
            // LOWER on both sides keeps the match case-insensitive on both
            // engines; SQLite has no ILIKE.
            conditions.push(format!(
                "LOWER(courses.name) LIKE {}",
                self.backend.placeholder(n)
            ));
        }

        if conditions.is_empty() {
            (String::new(), 0)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), n)
        }
    }

    /// List courses matching the filter, ordered by id ascending, with
    /// LIMIT/OFFSET pagination.
    pub async fn list(
        &self,
        filter: &CourseFilter,
        offset: u64,
        limit: u64,
    ) -> DbResult<Vec<CourseSummary>> {
        let (where_clause, n) = self.filter_clause(filter);
        let sql = format!(
            "SELECT {LIST_COLUMNS} {COURSE_JOINS}{where_clause} \
             ORDER BY courses.id LIMIT {} OFFSET {}",
            self.backend.placeholder(n + 1),
            self.backend.placeholder(n + 2),
        );

        let mut query = sqlx::query(&sql);
        if let Some(id) = filter.course_type_id {
            query = query.bind(id);
        }
        if let Some(id) = filter.department_id {
            query = query.bind(id);
        }
        if let Some(term) = &filter.search {
            query = query.bind(search_pattern(term));
        }
        query = query.bind(limit as i64).bind(offset as i64);

        let mut conn = self.backend.connect().await?;
        let rows = query
            .fetch_all(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        rows.into_iter()
            .map(|row| {
                Ok(CourseSummary {
                    id: row.try_get("id").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    name: row.try_get("name").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    department_code: row.try_get("code").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                    course_type_name: row.try_get("type_name").map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                })
            })
            .collect()
    }

    /// Count courses matching the filter, ignoring pagination.
    pub async fn count(&self, filter: &CourseFilter) -> DbResult<u64> {
        let (where_clause, _) = self.filter_clause(filter);
        let sql = format!("SELECT COUNT(*) {COURSE_JOINS}{where_clause}");

        let mut query = sqlx::query_scalar(&sql);
        if let Some(id) = filter.course_type_id {
            query = query.bind(id);
        }
        if let Some(id) = filter.department_id {
            query = query.bind(id);
        }
        if let Some(term) = &filter.search {
            query = query.bind(search_pattern(term));
        }

        let mut conn = self.backend.connect().await?;
        let total: i64 = query
            .fetch_one(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(total as u64)
    }

    /// Fetch the course card by id, with reference names resolved. Returns
    /// `None` when no course has that id.
    pub async fn get(&self, id: i64) -> DbResult<Option<CourseDetails>> {
        let sql = format!(
            "SELECT courses.name, courses.description, \
             departments.name AS department_name, course_types.type_name \
             {COURSE_JOINS} WHERE courses.id = {}",
            self.backend.placeholder(1)
        );

        let mut conn = self.backend.connect().await?;
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        row.map(|row| {
            Ok(CourseDetails {
                name: row.try_get("name").map_err(|e| DbError::Database {
                    message: e.to_string(),
                })?,
                description: row
                    .try_get("description")
                    .map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                department_name: row
                    .try_get("department_name")
                    .map_err(|e| DbError::Database {
                        message: e.to_string(),
                    })?,
                course_type_name: row.try_get("type_name").map_err(|e| DbError::Database {
                    message: e.to_string(),
                })?,
            })
        })
        .transpose()
    }

    /// Insert a new course and return its id.
    pub async fn create(&self, course: &NewCourse) -> DbResult<i64> {
        let sql = format!(
            "INSERT INTO courses (name, description, department_id, course_type_id) \
             VALUES ({}, {}, {}, {}) RETURNING id",
            self.backend.placeholder(1),
            self.backend.placeholder(2),
            self.backend.placeholder(3),
            self.backend.placeholder(4),
        );

        let mut conn = self.backend.connect().await?;
        let id: i64 = sqlx::query_scalar(&sql)
            .bind(&course.name)
            .bind(&course.description)
            .bind(course.department_id)
            .bind(course.course_type_id)
            .fetch_one(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        debug!(course_id = id, "created course");
        Ok(id)
    }

    /// Overwrite all fields of a course by id. Silently does nothing when
    /// the id does not exist.
    pub async fn update(&self, id: i64, course: &NewCourse) -> DbResult<()> {
        let sql = format!(
            "UPDATE courses \
             SET name = {}, description = {}, department_id = {}, course_type_id = {} \
             WHERE id = {}",
            self.backend.placeholder(1),
            self.backend.placeholder(2),
            self.backend.placeholder(3),
            self.backend.placeholder(4),
            self.backend.placeholder(5),
        );

        let mut conn = self.backend.connect().await?;
        let result = sqlx::query(&sql)
            .bind(&course.name)
            .bind(&course.description)
            .bind(course.department_id)
            .bind(course.course_type_id)
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        if result.rows_affected() == 0 {
            debug!(course_id = id, "update matched no course");
        }
        Ok(())
    }

    /// Delete a course by id. Silently does nothing when the id does not
    /// exist.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let sql = format!(
            "DELETE FROM courses WHERE id = {}",
            self.backend.placeholder(1)
        );

        let mut conn = self.backend.connect().await?;
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        if result.rows_affected() == 0 {
            debug!(course_id = id, "delete matched no course");
        }
        Ok(())
    }
}

/// LIKE pattern for a case-insensitive substring search.
fn search_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}
