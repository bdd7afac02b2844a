//! Storage errors

use std::path::Path;

use super::PortacodeError;

/// Creates a storage error
pub fn storage(message: impl Into<String>) -> PortacodeError {
    PortacodeError::Storage {
        message: message.into(),
    }
}

/// Creates a storage error for an I/O failure on a path
pub fn io_at(operation: &str, path: &Path, err: &std::io::Error) -> PortacodeError {
    PortacodeError::Storage {
        message: format!("{operation} {}: {err}", path.display()),
    }
}
