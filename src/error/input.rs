//! Input errors

use super::PortacodeError;

/// Creates an invalid input error
pub fn invalid_input(message: impl Into<String>) -> PortacodeError {
    PortacodeError::InvalidInput {
        message: message.into(),
    }
}
