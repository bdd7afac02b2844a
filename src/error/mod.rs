//! Error types and handling for Portacode
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Malformed constructor or setter arguments
//! - [`validation`]: Entry point missing or not among the stored objects
//! - [`storage`]: Repository and store I/O failures
//! - [`conflict`]: Staged files colliding with the bundle
//! - [`config`]: Configuration and description parsing errors

pub mod config;
pub mod conflict;
pub mod input;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod tests;

pub use conflict::{conflict, output_exists};
pub use input::invalid_input;
pub use storage::storage;
pub use validation::{entry_point_not_found, entry_point_not_set};

use std::collections::BTreeSet;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Portacode operations
#[derive(Error, Diagnostic, Debug)]
pub enum PortacodeError {
    // Input errors
    #[error("Invalid input: {message}")]
    #[diagnostic(code(portacode::input::invalid))]
    InvalidInput { message: String },

    // Validation errors
    #[error("The entry point of bundle '{label}' is not set")]
    #[diagnostic(
        code(portacode::validation::entry_point_not_set),
        help("Set the executable with 'portacode set-executable <bundle> <path>'")
    )]
    EntryPointNotSet { label: String },

    #[error("The executable `{path}` is not one of the uploaded files: [{}]", format_listing(.objects))]
    #[diagnostic(
        code(portacode::validation::entry_point_not_found),
        help("The executable must be given relative to the bundle root, e.g. 'bin/run.sh'")
    )]
    EntryPointNotFound {
        path: String,
        objects: BTreeSet<String>,
    },

    // Storage errors
    #[error("Storage error: {message}")]
    #[diagnostic(code(portacode::storage::io))]
    Storage { message: String },

    // Conflict errors
    #[error("The staged files contain `{path}`, which is also the executable of the bundle")]
    #[diagnostic(
        code(portacode::conflict::executable),
        help("Rename the staged file so it does not shadow the bundle's entry point")
    )]
    Conflict { path: String },

    #[error("Refusing to overwrite existing file: {path}")]
    #[diagnostic(
        code(portacode::conflict::output_exists),
        help("Choose an empty target directory or pass --overwrite")
    )]
    OutputExists { path: String },

    // Store lookup errors
    #[error("Bundle '{selector}' not found")]
    #[diagnostic(
        code(portacode::store::not_found),
        help("Run 'portacode list' to see the stored bundles")
    )]
    BundleNotFound { selector: String },

    #[error("Label '{label}' matches more than one bundle: {}", .ids.join(", "))]
    #[diagnostic(
        code(portacode::store::ambiguous_label),
        help("Select the bundle by its id instead")
    )]
    AmbiguousLabel { label: String, ids: Vec<String> },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(portacode::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid bundle description: {reason}")]
    #[diagnostic(code(portacode::config::description_invalid))]
    DescriptionInvalid { reason: String },
}

fn format_listing(objects: &BTreeSet<String>) -> String {
    objects
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for PortacodeError {
    fn from(err: std::io::Error) -> Self {
        PortacodeError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for PortacodeError {
    fn from(err: walkdir::Error) -> Self {
        PortacodeError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PortacodeError {
    fn from(err: serde_json::Error) -> Self {
        PortacodeError::Storage {
            message: format!("corrupt scope index: {err}"),
        }
    }
}

impl From<serde_yaml::Error> for PortacodeError {
    fn from(err: serde_yaml::Error) -> Self {
        PortacodeError::DescriptionInvalid {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PortacodeError>;
