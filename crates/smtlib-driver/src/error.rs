//! Errors from driving a solver subprocess.

use thiserror::Error;

/// Everything that can go wrong talking to a solver over its stdio pipes.
///
/// Malformed responses are not reported through this type — see
/// [`crate::Driver::send`], which maps a parse failure on the response
/// stream into an SMT-LIB [`smtlib_ast::response::Response`] instead of an
/// error, since a nonconforming solver is a fact about the conversation,
/// not a failure of the driver itself.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to spawn solver process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("i/o error talking to solver: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol violation: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, DriverError>;
