//! Reference table commands: the lists backing the filter controls.

use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_optional, truncate_with_ellipsis};
use crate::db::{Backend, CourseType, Department, ReferenceStore};

#[derive(Tabled)]
struct DepartmentDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    code: String,
}

impl From<&Department> for DepartmentDisplay {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            code: department.code.clone(),
        }
    }
}

#[derive(Tabled)]
struct CourseTypeDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Type")]
    type_name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&CourseType> for CourseTypeDisplay {
    fn from(course_type: &CourseType) -> Self {
        Self {
            id: course_type.id,
            type_name: course_type.type_name.clone(),
            description: truncate_with_ellipsis(
                &format_optional(course_type.description.as_deref()),
                60,
            ),
        }
    }
}

/// List all departments.
pub async fn departments(backend: &Backend, format: &str) -> CliResult<String> {
    let store = ReferenceStore::new(backend);
    let departments = store.list_departments().await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&departments)?);
    }

    let mut table = Table::new(departments.iter().map(DepartmentDisplay::from));
    apply_table_style(&mut table);
    Ok(table.to_string())
}

/// List all course types.
pub async fn course_types(backend: &Backend, format: &str) -> CliResult<String> {
    let store = ReferenceStore::new(backend);
    let course_types = store.list_course_types().await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&course_types)?);
    }

    let mut table = Table::new(course_types.iter().map(CourseTypeDisplay::from));
    apply_table_style(&mut table);
    Ok(table.to_string())
}
