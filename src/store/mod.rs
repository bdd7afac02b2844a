//! On-disk store for portable bundles
//!
//! The store owns three things: the deduplicated blob area shared by every
//! bundle, one repository scope (tree index) per bundle, and the persisted
//! bundle records. A bundle and its scope share the same id.

pub mod objects;
pub mod paths;
pub mod record;
pub mod scope;

pub use record::BundleRecord;
pub use scope::ScopeRepository;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::bundle::{BundleBuilder, BundleDescription, PortableBundle};
use crate::error::storage::io_at;
use crate::error::{PortacodeError, Result};
use crate::repository::Repository;
use crate::store::paths::{
    BUNDLES_DIR, OBJECTS_DIR, SCOPES_DIR, TMP_DIR, bundle_record_path, scope_index_path,
};

/// Handle on a store root directory
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open (and lay out, if needed) the store at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        for dir in [OBJECTS_DIR, SCOPES_DIR, BUNDLES_DIR, TMP_DIR] {
            let path = root.join(dir);
            fs::create_dir_all(&path).map_err(|e| io_at("failed to create", &path, &e))?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A fresh, empty scope for a new bundle
    pub fn new_scope(&self) -> Result<ScopeRepository> {
        ScopeRepository::open(&self.root, Uuid::new_v4())
    }

    /// The scope of an existing bundle
    pub fn scope(&self, id: Uuid) -> Result<ScopeRepository> {
        ScopeRepository::open(&self.root, id)
    }

    /// Create a bundle from `source` and persist it.
    ///
    /// Either the bundle is fully ingested and its record written, or nothing
    /// of it remains in the store.
    pub fn create_bundle(
        &self,
        builder: BundleBuilder,
        entry: &str,
        source: &Path,
    ) -> Result<PortableBundle> {
        let scope = self.new_scope()?;
        let bundle = builder.id(scope.id()).create(entry, source, scope)?;
        self.persist_new(bundle)
    }

    /// Create a bundle from an exported description and persist it
    pub fn import_description(&self, description: &BundleDescription) -> Result<PortableBundle> {
        self.create_bundle(
            BundleBuilder::from_description(description),
            &description.filepath_executable,
            &description.filepath_files,
        )
    }

    fn persist_new(&self, mut bundle: PortableBundle) -> Result<PortableBundle> {
        if let Err(e) = self.save(&bundle) {
            if let Err(rollback) = bundle.repository_mut().erase() {
                warn!(bundle = %bundle.id(), error = %rollback, "failed to erase scope of unsaved bundle");
            }
            return Err(e);
        }
        Ok(bundle)
    }

    /// Persist the record of `bundle`
    pub fn save(&self, bundle: &PortableBundle) -> Result<()> {
        let record = bundle.to_record();
        let path = bundle_record_path(&self.root, record.id);
        let yaml = serde_yaml::to_string(&record).map_err(|e| PortacodeError::Storage {
            message: format!("failed to serialize bundle record {}: {e}", record.id),
        })?;

        let tmp_dir = self.root.join(TMP_DIR);
        let mut tmp = NamedTempFile::new_in(&tmp_dir)
            .map_err(|e| io_at("failed to create temp file in", &tmp_dir, &e))?;
        tmp.write_all(yaml.as_bytes())
            .map_err(|e| io_at("failed to write", tmp.path(), &e))?;
        tmp.persist(&path)
            .map_err(|e| io_at("failed to write bundle record", &path, &e.error))?;

        debug!(bundle = %record.id, path = %path.display(), "bundle record saved");
        Ok(())
    }

    /// All stored bundle records, sorted by label then id
    pub fn list(&self) -> Result<Vec<BundleRecord>> {
        let dir = self.root.join(BUNDLES_DIR);
        let mut records = Vec::new();

        for entry in fs::read_dir(&dir).map_err(|e| io_at("failed to list", &dir, &e))? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            records.push(read_record(&path)?);
        }

        records.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    /// Find the record selected by label, id, or id prefix
    pub fn find(&self, selector: &str) -> Result<BundleRecord> {
        let records = self.list()?;

        if let Some(record) = records.iter().find(|r| r.id.to_string() == selector) {
            return Ok(record.clone());
        }

        let by_label: Vec<&BundleRecord> = records.iter().filter(|r| r.label == selector).collect();
        let candidates = if by_label.is_empty() {
            records.iter().filter(|r| r.matches_id(selector)).collect()
        } else {
            by_label
        };

        match candidates.as_slice() {
            [] => Err(PortacodeError::BundleNotFound {
                selector: selector.to_string(),
            }),
            [record] => Ok((*record).clone()),
            many => Err(PortacodeError::AmbiguousLabel {
                label: selector.to_string(),
                ids: many.iter().map(|r| r.id.to_string()).collect(),
            }),
        }
    }

    /// Load the bundle selected by label, id, or id prefix
    pub fn load(&self, selector: &str) -> Result<PortableBundle> {
        let record = self.find(selector)?;
        let scope = self.scope(record.id)?;
        PortableBundle::from_record(record, scope)
    }

    /// Remove a bundle's record and scope index. Blobs stay in place.
    pub fn delete(&self, selector: &str) -> Result<BundleRecord> {
        let record = self.find(selector)?;

        let index_path = scope_index_path(&self.root, record.id);
        if index_path.exists() {
            fs::remove_file(&index_path)
                .map_err(|e| io_at("failed to remove scope index", &index_path, &e))?;
        }
        let record_path = bundle_record_path(&self.root, record.id);
        fs::remove_file(&record_path)
            .map_err(|e| io_at("failed to remove bundle record", &record_path, &e))?;

        debug!(bundle = %record.id, "bundle deleted");
        Ok(record)
    }
}

fn read_record(path: &Path) -> Result<BundleRecord> {
    let yaml = fs::read_to_string(path).map_err(|e| io_at("failed to read", path, &e))?;
    serde_yaml::from_str(&yaml).map_err(|e| PortacodeError::Storage {
        message: format!("corrupt bundle record {}: {e}", path.display()),
    })
}
