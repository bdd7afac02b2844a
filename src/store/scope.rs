//! Repository scope backed by the on-disk store
//!
//! A scope is a tree index (relative path -> object id) persisted as JSON under
//! `scopes/<id>.json`. The blobs themselves live in the shared object store.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;
use uuid::Uuid;
use walkdir::WalkDir;

use crate::error::storage::io_at;
use crate::error::{Result, invalid_input, storage};
use crate::hash::hash_tree;
use crate::path_utils::relative_key;
use crate::repository::Repository;
use crate::store::objects::ObjectStore;
use crate::store::paths::{TMP_DIR, scope_index_path};

const INDEX_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScopeIndex {
    version: u32,
    objects: BTreeMap<String, String>,
}

/// One bundle's view of the content-addressed store
#[derive(Debug)]
pub struct ScopeRepository {
    id: Uuid,
    root: PathBuf,
    objects: ObjectStore,
    index: BTreeMap<String, String>,
}

impl ScopeRepository {
    /// Open the scope for `id`, loading its index if one was written before
    pub(crate) fn open(root: &Path, id: Uuid) -> Result<Self> {
        let index_path = scope_index_path(root, id);
        let index = if index_path.is_file() {
            let content = fs::read_to_string(&index_path)
                .map_err(|e| io_at("failed to read scope index", &index_path, &e))?;
            let parsed: ScopeIndex = serde_json::from_str(&content)?;
            if parsed.version != INDEX_VERSION {
                return Err(storage(format!(
                    "scope index {} has unsupported version {}",
                    index_path.display(),
                    parsed.version
                )));
            }
            parsed.objects
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            id,
            root: root.to_path_buf(),
            objects: ObjectStore::new(root),
            index,
        })
    }

    /// Identity of the bundle owning this scope
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Content fingerprint over every stored path and object id
    pub fn fingerprint(&self) -> String {
        hash_tree(
            self.index
                .iter()
                .map(|(path, oid)| (path.as_str(), oid.as_str())),
        )
    }

    fn write_index(&self) -> Result<()> {
        let index_path = scope_index_path(&self.root, self.id);
        let tmp_dir = self.root.join(TMP_DIR);
        for dir in [index_path.parent(), Some(tmp_dir.as_path())].into_iter().flatten() {
            fs::create_dir_all(dir).map_err(|e| io_at("failed to create", dir, &e))?;
        }

        let index = ScopeIndex {
            version: INDEX_VERSION,
            objects: self.index.clone(),
        };
        let json = serde_json::to_string_pretty(&index)?;

        let mut tmp = NamedTempFile::new_in(&tmp_dir)
            .map_err(|e| io_at("failed to create temp file in", &tmp_dir, &e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| io_at("failed to write", tmp.path(), &e))?;
        tmp.persist(&index_path)
            .map_err(|e| io_at("failed to write scope index", &index_path, &e.error))?;
        Ok(())
    }
}

impl Repository for ScopeRepository {
    fn put_tree(&mut self, source: &Path) -> Result<()> {
        if !source.is_dir() {
            return Err(invalid_input(format!(
                "the path `{}` is not a directory",
                source.display()
            )));
        }

        let mut ingested = 0usize;
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(key) = relative_key(source, path)? else {
                continue;
            };

            let oid = self.objects.put_file(path)?;
            debug!(scope = %self.id, path = %key, %oid, "ingested object");
            self.index.insert(key, oid);
            ingested += 1;
        }

        self.write_index()?;
        debug!(scope = %self.id, files = ingested, source = %source.display(), "tree ingested");
        Ok(())
    }

    fn list_object_names(&self) -> Result<BTreeSet<String>> {
        Ok(self.index.keys().cloned().collect())
    }

    fn get_object_content(&self, path: &str) -> Result<Vec<u8>> {
        let oid = self
            .index
            .get(path)
            .ok_or_else(|| storage(format!("object `{path}` is not stored in scope {}", self.id)))?;
        self.objects.read(oid)
    }

    fn erase(&mut self) -> Result<()> {
        self.index.clear();
        let index_path = scope_index_path(&self.root, self.id);
        if index_path.exists() {
            fs::remove_file(&index_path)
                .map_err(|e| io_at("failed to remove scope index", &index_path, &e))?;
        }
        Ok(())
    }
}
