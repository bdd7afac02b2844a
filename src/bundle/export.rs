//! Export manifests: a bundle's files projected onto a target directory

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::storage::io_at;
use crate::error::{Result, output_exists};

/// What to do when an output file already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Abort before writing anything
    #[default]
    Fail,
    /// Replace existing files
    Overwrite,
}

/// Output file path -> raw content for every file of a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportManifest {
    root: PathBuf,
    executable: Option<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl ExportManifest {
    pub(crate) fn new(
        root: PathBuf,
        executable: Option<PathBuf>,
        files: BTreeMap<PathBuf, Vec<u8>>,
    ) -> Self {
        Self {
            root,
            executable,
            files,
        }
    }

    /// Target directory the manifest was built for
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output path of the entry point, if it is among the files
    pub fn executable(&self) -> Option<&Path> {
        self.executable
            .as_deref()
            .filter(|path| self.files.contains_key(*path))
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, Vec<u8>> {
        &self.files
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file of the manifest to disk.
    ///
    /// With [`OverwritePolicy::Fail`] all output paths are checked first, so a
    /// conflict leaves the target untouched. Returns the number of files written.
    pub fn materialize(&self, policy: OverwritePolicy) -> Result<usize> {
        if policy == OverwritePolicy::Fail {
            if let Some(existing) = self.files.keys().find(|path| path.exists()) {
                return Err(output_exists(existing));
            }
        }

        for (path, content) in &self.files {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| io_at("failed to create", parent, &e))?;
            }
            fs::write(path, content).map_err(|e| io_at("failed to write", path, &e))?;
            debug!(path = %path.display(), bytes = content.len(), "wrote exported file");
        }

        if let Some(executable) = self.executable() {
            mark_executable(executable)?;
        }

        Ok(self.files.len())
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| io_at("failed to stat", path, &e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    fs::set_permissions(path, permissions).map_err(|e| io_at("failed to chmod", path, &e))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
