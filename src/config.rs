//! Store settings (`<store>/config.yaml`)
//!
//! ```yaml
//! export:
//!   overwrite: fail   # or: overwrite
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle::OverwritePolicy;
use crate::error::config::parse_failed;
use crate::error::storage::io_at;
use crate::error::Result;
use crate::store::paths::{CONFIG_FILE, default_store_dir};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    /// Policy used when an export target already holds a file
    pub overwrite: OverwritePolicy,
}

impl Settings {
    /// Parse settings from YAML; an empty document yields the defaults
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| parse_failed(origin.display().to_string(), e.to_string()))
    }

    /// Load `config.yaml` from the store root, if there is one
    pub fn load(store_root: &Path) -> Result<Self> {
        let path = store_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let yaml = fs::read_to_string(&path).map_err(|e| io_at("failed to read", &path, &e))?;
        Self::from_yaml(&yaml, &path)
    }
}

/// Store root from the command line, or the environment/platform default
pub fn resolve_store_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => default_store_dir(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PortacodeError;
    use crate::store::paths::STORE_DIR_ENV;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(temp.path()).unwrap();
        assert_eq!(settings.export.overwrite, OverwritePolicy::Fail);
    }

    #[test]
    fn test_overwrite_setting() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "export:\n  overwrite: overwrite\n",
        )
        .unwrap();

        let settings = Settings::load(temp.path()).unwrap();
        assert_eq!(settings.export.overwrite, OverwritePolicy::Overwrite);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "\n").unwrap();
        assert_eq!(Settings::load(temp.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "export:\n  overwrite: sometimes\n").unwrap();

        let err = Settings::load(temp.path()).unwrap_err();
        assert!(matches!(err, PortacodeError::ConfigParseFailed { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_yaml("exprot: {}\n", Path::new("config.yaml")).unwrap_err();
        assert!(matches!(err, PortacodeError::ConfigParseFailed { .. }));
    }

    #[test]
    #[serial]
    fn test_resolve_store_dir_flag_wins() {
        unsafe {
            std::env::set_var(STORE_DIR_ENV, "/from/env");
        }
        let dir = resolve_store_dir(Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));

        let dir = resolve_store_dir(None).unwrap();
        assert_eq!(dir, PathBuf::from("/from/env"));
        unsafe {
            std::env::remove_var(STORE_DIR_ENV);
        }
    }
}
