//! Shared helpers for smtc's subcommands.

use std::fs;
use std::path::Path;

use crate::error::{Result, SmtcError};

/// Reads a script file into memory, wrapping the I/O error with its path
/// so failures point at the file that caused them.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SmtcError::ReadFile {
        path: path.display().to_string(),
        source,
    })
}
