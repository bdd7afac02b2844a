//! Validation errors

use std::collections::BTreeSet;

use super::PortacodeError;

/// Creates an entry point not set error
pub fn entry_point_not_set(label: impl Into<String>) -> PortacodeError {
    PortacodeError::EntryPointNotSet {
        label: label.into(),
    }
}

/// Creates an entry point not found error carrying the full object listing
pub fn entry_point_not_found(path: impl Into<String>, objects: BTreeSet<String>) -> PortacodeError {
    PortacodeError::EntryPointNotFound {
        path: path.into(),
        objects,
    }
}
