//! Configuration errors

use super::PortacodeError;

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PortacodeError {
    PortacodeError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid description error
pub fn description_invalid(reason: impl Into<String>) -> PortacodeError {
    PortacodeError::DescriptionInvalid {
        reason: reason.into(),
    }
}
