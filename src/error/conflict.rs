//! Conflict errors

use std::path::Path;

use super::PortacodeError;

/// Creates an executable conflict error
pub fn conflict(path: impl Into<String>) -> PortacodeError {
    PortacodeError::Conflict { path: path.into() }
}

/// Creates an error for an export output that already exists
pub fn output_exists(path: &Path) -> PortacodeError {
    PortacodeError::OutputExists {
        path: path.display().to_string(),
    }
}
