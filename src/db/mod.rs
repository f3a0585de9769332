//! Data access layer.
//!
//! The core of the application: a backend abstraction over the two supported
//! engines and the parameterized query builders for the course catalog.
//!
//! # Architecture
//!
//! - `backend`: engine selection, connections, placeholder syntax
//! - `bootstrap`: first-run schema creation and seed data
//! - `course`: filtered, paginated course queries and CRUD
//! - `reference`: read-only department / course type lists
//! - `error`: storage-agnostic error types
//! - `models`: plain-data rows exchanged with the UI layer

mod backend;
mod bootstrap;
mod course;
mod error;
mod models;
mod reference;

#[cfg(test)]
mod backend_test;
#[cfg(test)]
mod bootstrap_test;
#[cfg(test)]
mod reference_test;

pub use backend::Backend;
pub use bootstrap::initialize;
pub use course::CourseStore;
pub use error::{DbError, DbResult};
pub use models::{
    CourseDetails, CourseFilter, CourseSummary, CourseType, Department, NewCourse, PAGE_SIZE,
    total_pages,
};
pub use reference::ReferenceStore;
