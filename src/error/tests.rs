//! Error type tests
//!
//! Tests for PortacodeError enum, its constructors and conversions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::BTreeSet;

use miette::Diagnostic;

use crate::error::PortacodeError;
use crate::error::config::{description_invalid, parse_failed};
use crate::error::storage::io_at;
use crate::error::{
    conflict, entry_point_not_found, entry_point_not_set, invalid_input, output_exists, storage,
};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_code() {
    let err = conflict("run.sh");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("portacode::conflict::executable".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PortacodeError = io_err.into();
    assert!(matches!(err, PortacodeError::Storage { .. }));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: PortacodeError = json_err.into();
    assert!(matches!(err, PortacodeError::Storage { .. }));
    assert!(err.to_string().contains("corrupt scope index"));
}

#[test]
fn test_yaml_error_conversion() {
    let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
    let err: PortacodeError = yaml_err.into();
    assert!(matches!(err, PortacodeError::DescriptionInvalid { .. }));
}

#[test]
fn test_entry_point_not_found_lists_objects() {
    let objects: BTreeSet<String> = ["lib/helper.py", "README"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let err = entry_point_not_found("run.sh", objects);
    assert_eq!(
        err.to_string(),
        "The executable `run.sh` is not one of the uploaded files: [README, lib/helper.py]"
    );
}

#[test]
fn test_entry_point_not_found_empty_listing() {
    let err = entry_point_not_found("run.sh", BTreeSet::new());
    assert!(err.to_string().ends_with("uploaded files: []"));
}

test_error_contains!(
    test_invalid_input,
    invalid_input("path does not exist"),
    "Invalid input",
    "path does not exist"
);

test_error_contains!(
    test_entry_point_not_set,
    entry_point_not_set("my-code"),
    "my-code",
    "not set"
);

test_error_contains!(test_storage, storage("disk full"), "Storage error", "disk full");

test_error_contains!(
    test_io_at,
    io_at(
        "failed to read",
        std::path::Path::new("/store/objects/ab/cd"),
        &std::io::Error::other("boom")
    ),
    "failed to read /store/objects/ab/cd",
    "boom"
);

test_error_contains!(test_conflict, conflict("run.sh"), "`run.sh`", "executable");

test_error_contains!(
    test_output_exists,
    output_exists(std::path::Path::new("/tmp/out/run.sh")),
    "Refusing to overwrite",
    "/tmp/out/run.sh"
);

test_error_contains!(
    test_config_parse_failed,
    parse_failed("/store/config.yaml", "bad key"),
    "/store/config.yaml",
    "bad key"
);

test_error_contains!(
    test_description_invalid,
    description_invalid("missing filepath_executable"),
    "Invalid bundle description",
    "missing filepath_executable"
);

test_error_contains!(
    test_ambiguous_label,
    PortacodeError::AmbiguousLabel {
        label: "code".to_string(),
        ids: vec!["a1".to_string(), "b2".to_string()],
    },
    "'code'",
    "a1, b2"
);
