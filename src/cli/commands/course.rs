//! Course commands: paginated listing, card display, and CRUD.

use std::io::{self, Write};

use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, format_optional, truncate_with_ellipsis};
use crate::db::{Backend, CourseFilter, CourseStore, CourseSummary, NewCourse, PAGE_SIZE, total_pages};

#[derive(Tabled)]
struct CourseDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Type")]
    course_type: String,
}

impl From<&CourseSummary> for CourseDisplay {
    fn from(course: &CourseSummary) -> Self {
        Self {
            id: course.id,
            name: truncate_with_ellipsis(&course.name, 50),
            department: course.department_code.clone(),
            course_type: course.course_type_name.clone(),
        }
    }
}

/// List one page of courses with optional filters.
pub async fn list(
    backend: &Backend,
    course_type: &str,
    department: &str,
    search: Option<&str>,
    page: u64,
    format: &str,
) -> CliResult<String> {
    if page == 0 {
        return Err(CliError::InvalidInput {
            message: "page numbers start at 1".to_string(),
        });
    }

    let filter = CourseFilter::parse(Some(course_type), Some(department), search)?;
    let store = CourseStore::new(backend);

    let total = store.count(&filter).await?;
    let offset = (page - 1) * PAGE_SIZE;
    let courses = store.list(&filter, offset, PAGE_SIZE).await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&courses)?);
    }

    if total == 0 {
        return Ok("No courses found.".to_string());
    }

    let mut table = Table::new(courses.iter().map(CourseDisplay::from));
    apply_table_style(&mut table);

    Ok(format!(
        "{table}\nPage {page} of {} ({total} courses)",
        total_pages(total)
    ))
}

/// Show the full course card.
pub async fn show(backend: &Backend, id: i64, format: &str) -> CliResult<String> {
    let store = CourseStore::new(backend);
    let details = store.get(id).await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&details)?);
    }

    match details {
        Some(details) => Ok(format!(
            "Name:        {}\nDescription: {}\nDepartment:  {}\nType:        {}",
            details.name,
            format_optional(details.description.as_deref()),
            details.department_name,
            details.course_type_name,
        )),
        None => Ok(format!("Course {id} not found.")),
    }
}

/// Create a new course.
pub async fn add(
    backend: &Backend,
    name: &str,
    description: Option<&str>,
    department_id: i64,
    course_type_id: i64,
) -> CliResult<String> {
    let store = CourseStore::new(backend);
    let id = store
        .create(&NewCourse {
            name: name.to_string(),
            description: description.map(String::from),
            department_id,
            course_type_id,
        })
        .await?;

    Ok(format!("Created course {id}"))
}

/// Overwrite an existing course.
pub async fn edit(
    backend: &Backend,
    id: i64,
    name: &str,
    description: Option<&str>,
    department_id: i64,
    course_type_id: i64,
) -> CliResult<String> {
    let store = CourseStore::new(backend);
    store
        .update(
            id,
            &NewCourse {
                name: name.to_string(),
                description: description.map(String::from),
                department_id,
                course_type_id,
            },
        )
        .await?;

    Ok(format!("Updated course {id}"))
}

/// Delete a course, asking for confirmation unless `yes` is set.
pub async fn delete(backend: &Backend, id: i64, yes: bool) -> CliResult<String> {
    if !yes && !confirm_delete(id)? {
        return Ok("Aborted.".to_string());
    }

    let store = CourseStore::new(backend);
    store.delete(id).await?;

    Ok(format!("Deleted course {id}"))
}

fn confirm_delete(id: i64) -> CliResult<bool> {
    print!("Delete course {id}? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes" | "YES"))
}
