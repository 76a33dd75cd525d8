//! Error handling for the smtc CLI.

use thiserror::Error;

/// Top-level error type for the smtc binary.
#[derive(Debug, Error)]
pub enum SmtcError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Syntax(#[from] smtlib_parse::Error),

    #[error("solver error: {0}")]
    Driver(#[from] smtlib_driver::DriverError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid --solver command: {0}")]
    InvalidSolverCommand(String),
}

pub type Result<T> = std::result::Result<T, SmtcError>;
