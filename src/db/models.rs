//! Domain models for the course catalog.
//!
//! These models are storage-agnostic and carry no driver types; the UI layer
//! consumes them as plain rows.

use serde::{Deserialize, Serialize};

use super::error::{DbError, DbResult};

/// Number of courses shown per page.
pub const PAGE_SIZE: u64 = 10;

/// Total page count for a result set of `total` rows at [`PAGE_SIZE`].
pub fn total_pages(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

/// A department reference row. Seeded once, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// A course type reference row. Seeded once, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseType {
    pub id: i64,
    pub type_name: String,
    pub description: Option<String>,
}

/// One row of the paginated course listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: i64,
    pub name: String,
    pub department_code: String,
    pub course_type_name: String,
}

/// The full course card, with reference names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub name: String,
    pub description: Option<String>,
    pub department_name: String,
    pub course_type_name: String,
}

/// Payload for creating or overwriting a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
    pub department_id: i64,
    pub course_type_id: i64,
}

/// Conjunctive course filters. `None` on a dimension means "do not restrict"
/// (the UI's "All" sentinel).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Exact course type id match.
    pub course_type_id: Option<i64>,
    /// Exact department id match.
    pub department_id: Option<i64>,
    /// Case-insensitive substring match on the course name.
    pub search: Option<String>,
}

impl CourseFilter {
    /// Parse raw filter values as supplied by the UI layer.
    ///
    /// The sentinel "all" (any casing) and empty strings map to no filter;
    /// anything else must be a numeric id. Malformed values fail validation
    /// here, before any query is constructed.
    pub fn parse(
        course_type: Option<&str>,
        department: Option<&str>,
        search: Option<&str>,
    ) -> DbResult<Self> {
        Ok(Self {
            course_type_id: parse_filter_id(course_type, "course type")?,
            department_id: parse_filter_id(department, "department")?,
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        })
    }
}

fn parse_filter_id(raw: Option<&str>, field: &str) -> DbResult<Option<i64>> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some(s) if s.is_empty() || s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(|_| DbError::Validation {
            message: format!("{field} filter must be a numeric id or 'all', got '{s}'"),
        }),
    }
}
