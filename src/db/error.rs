//! Database error types.
//!
//! Storage-backend agnostic errors, using thiserror for derive macros and
//! miette for diagnostic output. Configuration errors live with the config
//! loader; everything the data-access layer can raise is here.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    /// A filter or form value was outside its expected domain. Raised
    /// before any query is constructed; no state has been mutated.
    #[error("Validation error: {message}")]
    #[diagnostic(code(coursecat::db::validation))]
    Validation { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(coursecat::db::connection))]
    Connection { message: String },

    /// Any failure reported by the underlying engine, including constraint
    /// violations. The operation is aborted; there is no retry.
    #[error("Database error: {message}")]
    #[diagnostic(code(coursecat::db::database))]
    Database { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
