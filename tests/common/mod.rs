//! Common test utilities for Portacode integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding a store and some source folders
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Store directory used by this workspace
    pub fn store_dir(&self) -> PathBuf {
        self.path.join("store")
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create `code/` holding `run.sh` and `lib/helper.py`
    pub fn sample_code(&self) -> PathBuf {
        self.write_file("code/run.sh", "#!/bin/sh\npython lib/helper.py\n");
        self.write_file("code/lib/helper.py", "print('hello')\n");
        self.path.join("code")
    }

    /// `portacode` command bound to this workspace's store
    pub fn cmd(&self) -> Command {
        portacode_cmd(&self.store_dir(), &self.path)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// `portacode` command with an isolated store and log level
#[allow(dead_code, deprecated)]
pub fn portacode_cmd(store: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("portacode").expect("Failed to find portacode binary");
    cmd.current_dir(cwd);
    cmd.env("PORTACODE_STORE_DIR", store);
    cmd.env_remove("PORTACODE_LOG");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("a/b.txt", "x");
        assert!(workspace.file_exists("a/b.txt"));
        assert_eq!(workspace.read_file("a/b.txt"), "x");
    }
}
