//! Deduplicated blob storage
//!
//! Blobs are named by the BLAKE3 digest of their content. A blob is copied into
//! `tmp/` while it is hashed and only renamed into `objects/` once complete, so
//! a reader never observes a partially written object.

use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use blake3::Hasher;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::storage::io_at;
use crate::error::{Result, storage};
use crate::hash::{hash_bytes, verify_hash};
use crate::store::paths::{TMP_DIR, object_path};

/// Content-addressed blob storage below a store root
#[derive(Debug, Clone)]
pub struct ObjectStore {
    root: PathBuf,
}

impl ObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether a blob with this id is present
    pub fn contains(&self, oid: &str) -> bool {
        object_path(&self.root, oid).is_file()
    }

    /// Copy a file into the store, returning its object id
    pub fn put_file(&self, source: &Path) -> Result<String> {
        let tmp_dir = self.root.join(TMP_DIR);
        fs::create_dir_all(&tmp_dir).map_err(|e| io_at("failed to create", &tmp_dir, &e))?;

        let file = File::open(source).map_err(|e| io_at("failed to open", source, &e))?;
        let mut reader = BufReader::new(file);
        let mut tmp =
            NamedTempFile::new_in(&tmp_dir).map_err(|e| io_at("failed to create temp file in", &tmp_dir, &e))?;
        let mut hasher = Hasher::new();
        let mut buffer = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| io_at("failed to read", source, &e))?;

            if bytes_read == 0 {
                break;
            }

            hasher.update(&buffer[..bytes_read]);
            tmp.write_all(&buffer[..bytes_read])
                .map_err(|e| io_at("failed to write", tmp.path(), &e))?;
        }

        let oid = hasher.finalize().to_hex().to_string();
        self.persist(tmp, &oid)?;
        Ok(oid)
    }

    /// Store an in-memory blob, returning its object id
    pub fn put_bytes(&self, bytes: &[u8]) -> Result<String> {
        let tmp_dir = self.root.join(TMP_DIR);
        fs::create_dir_all(&tmp_dir).map_err(|e| io_at("failed to create", &tmp_dir, &e))?;

        let oid = hash_bytes(bytes);
        let mut tmp =
            NamedTempFile::new_in(&tmp_dir).map_err(|e| io_at("failed to create temp file in", &tmp_dir, &e))?;
        tmp.write_all(bytes)
            .map_err(|e| io_at("failed to write", tmp.path(), &e))?;
        self.persist(tmp, &oid)?;
        Ok(oid)
    }

    fn persist(&self, tmp: NamedTempFile, oid: &str) -> Result<()> {
        if self.contains(oid) {
            debug!(%oid, "object already stored");
            return Ok(());
        }

        let dest = object_path(&self.root, oid);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| io_at("failed to create", parent, &e))?;
        }

        tmp.as_file()
            .sync_all()
            .map_err(|e| io_at("failed to flush", tmp.path(), &e))?;
        tmp.persist(&dest)
            .map_err(|e| io_at("failed to move object into place at", &dest, &e.error))?;
        debug!(%oid, "object stored");
        Ok(())
    }

    /// Read a blob and check it still matches its id
    pub fn read(&self, oid: &str) -> Result<Vec<u8>> {
        let path = object_path(&self.root, oid);
        let bytes = fs::read(&path).map_err(|e| io_at("failed to read object", &path, &e))?;

        let actual = hash_bytes(&bytes);
        if !verify_hash(oid, &actual) {
            return Err(storage(format!(
                "object {oid} is corrupt (content hashes to {actual})"
            )));
        }

        Ok(bytes)
    }
}
