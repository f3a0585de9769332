use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Invalid input: {message}")]
    #[diagnostic(code(coursecat::cli::invalid_input))]
    InvalidInput { message: String },

    #[error("Failed to read confirmation from terminal: {0}")]
    #[diagnostic(code(coursecat::cli::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output as JSON: {0}")]
    #[diagnostic(code(coursecat::cli::json))]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
