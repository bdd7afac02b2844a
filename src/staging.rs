//! Staging folders: files a job-preparation step intends to place next to a bundle

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, invalid_input};
use crate::path_utils::relative_key;

/// Anything that can list the relative paths it will stage
pub trait StagingFolder {
    /// Relative paths of the staged files, in canonical form
    fn content_list(&self) -> Result<BTreeSet<String>>;
}

impl StagingFolder for BTreeSet<String> {
    fn content_list(&self) -> Result<BTreeSet<String>> {
        Ok(self.clone())
    }
}

impl StagingFolder for HashSet<String> {
    fn content_list(&self) -> Result<BTreeSet<String>> {
        Ok(self.iter().cloned().collect())
    }
}

impl StagingFolder for [&str] {
    fn content_list(&self) -> Result<BTreeSet<String>> {
        Ok(self.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> StagingFolder for [&str; N] {
    fn content_list(&self) -> Result<BTreeSet<String>> {
        self.as_slice().content_list()
    }
}

/// A real directory whose files will be copied into the working directory
#[derive(Debug, Clone)]
pub struct SandboxFolder {
    root: PathBuf,
}

impl SandboxFolder {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(invalid_input(format!(
                "the staging path `{}` is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StagingFolder for SandboxFolder {
    fn content_list(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            if let Some(key) = relative_key(&self.root, entry.path())? {
                names.insert(key);
            }
        }
        Ok(names)
    }
}
