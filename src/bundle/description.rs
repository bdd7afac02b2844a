//! Structured, portable description of a bundle
//!
//! This is the YAML document written next to an exported file dump. Its
//! `filepath_files` points at the dumped folder, so the pair can be imported
//! again on another machine with `portacode create --config`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::config::description_invalid;
use crate::error::storage::io_at;
use crate::error::Result;

/// Portable description of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDescription {
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub filepath_executable: String,
    pub filepath_files: PathBuf,
    #[serde(default)]
    pub prepend_text: String,
    #[serde(default)]
    pub append_text: String,
}

impl BundleDescription {
    /// Parse a description from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let description: Self = serde_yaml::from_str(yaml)?;
        if description.label.trim().is_empty() {
            return Err(description_invalid("the label must not be empty"));
        }
        Ok(description)
    }

    /// Load a description file; a relative `filepath_files` is resolved
    /// against the directory holding the file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml =
            fs::read_to_string(path).map_err(|e| io_at("failed to read description", path, &e))?;
        let mut description = Self::from_yaml(&yaml)?;
        if description.filepath_files.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            description.filepath_files = base.join(&description.filepath_files);
        }
        Ok(description)
    }

    /// Serialize the description to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML: &str = "label: my-code\nfilepath_executable: run.sh\nfilepath_files: files\n";

    #[test]
    fn test_from_yaml_defaults() {
        let description = BundleDescription::from_yaml(YAML).unwrap();
        assert_eq!(description.label, "my-code");
        assert_eq!(description.filepath_executable, "run.sh");
        assert!(description.prepend_text.is_empty());
    }

    #[test]
    fn test_from_yaml_missing_executable() {
        let err = BundleDescription::from_yaml("label: x\nfilepath_files: f\n").unwrap_err();
        assert!(err.to_string().contains("filepath_executable"));
    }

    #[test]
    fn test_from_yaml_empty_label() {
        let yaml = "label: ''\nfilepath_executable: run.sh\nfilepath_files: f\n";
        assert!(BundleDescription::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_resolves_relative_files_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my-code.yaml");
        fs::write(&path, YAML).unwrap();

        let description = BundleDescription::load(&path).unwrap();
        assert_eq!(description.filepath_files, temp.path().join("files"));
    }

    #[test]
    fn test_to_yaml_round_trip() {
        let description = BundleDescription::from_yaml(YAML).unwrap();
        let yaml = description.to_yaml().unwrap();
        assert_eq!(BundleDescription::from_yaml(&yaml).unwrap(), description);
    }
}
