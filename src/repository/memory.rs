//! In-memory repository scope
//!
//! Keeps objects in a map keyed by relative path, deduplicated by digest like
//! the on-disk store. Useful for short-lived bundles that are exported right
//! away and for exercising bundles without touching a store root.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use walkdir::WalkDir;

use crate::error::storage::io_at;
use crate::error::{Result, invalid_input, storage};
use crate::hash::hash_bytes;
use crate::path_utils::relative_key;
use crate::repository::Repository;

#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    index: BTreeMap<String, String>,
    blobs: BTreeMap<String, Arc<Vec<u8>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` under the relative path `path`
    pub fn put_object(&mut self, path: &str, content: Vec<u8>) {
        let oid = hash_bytes(&content);
        self.blobs
            .entry(oid.clone())
            .or_insert_with(|| Arc::new(content));
        self.index.insert(path.to_string(), oid);
    }

    /// Number of distinct blobs held
    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }
}

impl Repository for MemoryRepository {
    fn put_tree(&mut self, source: &Path) -> Result<()> {
        if !source.is_dir() {
            return Err(invalid_input(format!(
                "the path `{}` is not a directory",
                source.display()
            )));
        }

        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(key) = relative_key(source, path)? else {
                continue;
            };
            let content = fs::read(path).map_err(|e| io_at("failed to read", path, &e))?;
            self.put_object(&key, content);
        }
        Ok(())
    }

    fn list_object_names(&self) -> Result<BTreeSet<String>> {
        Ok(self.index.keys().cloned().collect())
    }

    fn get_object_content(&self, path: &str) -> Result<Vec<u8>> {
        self.index
            .get(path)
            .and_then(|oid| self.blobs.get(oid))
            .map(|blob| blob.as_ref().clone())
            .ok_or_else(|| storage(format!("object `{path}` is not stored")))
    }

    fn erase(&mut self) -> Result<()> {
        self.index.clear();
        self.blobs.clear();
        Ok(())
    }
}
