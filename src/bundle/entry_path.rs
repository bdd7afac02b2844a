//! The executable pointer of a bundle

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::path_utils::{canonical_relative, native_relative};

/// Relative path of the entry point inside a bundle.
///
/// Always non-empty, never absolute, never escaping the bundle root, and kept
/// in canonical form (forward slashes, no `.` segments).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryPath(String);

impl EntryPath {
    /// Parse and canonicalize an entry path
    pub fn parse(value: &str) -> Result<Self> {
        canonical_relative(value).map(Self)
    }

    /// Canonical string form, the form compared against stored object names
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Entry path as a relative filesystem path
    pub fn to_path_buf(&self) -> PathBuf {
        native_relative(&self.0)
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for EntryPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Serialize for EntryPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
