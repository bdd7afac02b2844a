//! Portable executable bundles
//!
//! A [`PortableBundle`] is an executable plus every auxiliary file it needs,
//! ingested into a content-addressed repository scope, together with the
//! relative path of the entry point inside that scope.
//!
//! The entry point is metadata, not a stored object: it can be repointed at
//! any time, so [`PortableBundle::validate`] must be called before the bundle
//! is trusted for execution.

pub mod description;
pub mod entry_path;
pub mod export;


pub use description::BundleDescription;
pub use entry_path::EntryPath;
pub use export::{ExportManifest, OverwritePolicy};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use uuid::Uuid;

use crate::computer::Computer;
use crate::error::storage::io_at;
use crate::error::{
    Result, conflict, entry_point_not_found, entry_point_not_set, invalid_input,
};
use crate::path_utils::native_relative;
use crate::repository::Repository;
use crate::staging::StagingFolder;
use crate::store::{BundleRecord, ScopeRepository};
use crate::transaction::IngestGuard;

/// An executable and its auxiliary files, stored as one unit
#[derive(Debug)]
pub struct PortableBundle<R: Repository = ScopeRepository> {
    id: Uuid,
    label: String,
    description: String,
    prepend_text: String,
    append_text: String,
    entry: Option<EntryPath>,
    repository: R,
}

/// Builder for [`PortableBundle`] carrying the optional metadata
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    id: Option<Uuid>,
    label: String,
    description: String,
    prepend_text: String,
    append_text: String,
}

impl BundleBuilder {
    /// Start building a bundle with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            description: String::new(),
            prepend_text: String::new(),
            append_text: String::new(),
        }
    }

    /// Carry over the metadata of an exported description
    pub fn from_description(description: &BundleDescription) -> Self {
        Self::new(description.label.clone())
            .description(description.description.clone())
            .prepend_text(description.prepend_text.clone())
            .append_text(description.append_text.clone())
    }

    /// Use a specific identity instead of a fresh random one
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Text placed before the executable in the submission script
    pub fn prepend_text(mut self, text: impl Into<String>) -> Self {
        self.prepend_text = text.into();
        self
    }

    /// Text placed after the executable in the submission script
    pub fn append_text(mut self, text: impl Into<String>) -> Self {
        self.append_text = text.into();
        self
    }

    /// Ingest `source` into `repository` and record `entry` as the executable.
    ///
    /// Arguments are checked before anything is written. If ingestion fails the
    /// scope is erased again, so no half-built bundle is ever observable.
    pub fn create<R: Repository>(
        self,
        entry: &str,
        source: &Path,
        mut repository: R,
    ) -> Result<PortableBundle<R>> {
        if !source.exists() {
            return Err(invalid_input(format!(
                "The filepath `{}` does not exist.",
                source.display()
            )));
        }
        if !source.is_dir() {
            return Err(invalid_input(format!(
                "The filepath `{}` is not a directory.",
                source.display()
            )));
        }
        let entry = EntryPath::parse(entry)?;
        if !repository.list_object_names()?.is_empty() {
            return Err(invalid_input(
                "the repository scope already holds objects of another bundle",
            ));
        }

        let id = self.id.unwrap_or_else(Uuid::new_v4);
        {
            let mut guard = IngestGuard::new(&mut repository);
            guard.put_tree(source)?;
            guard.commit();
        }
        debug!(bundle = %id, entry = %entry, source = %source.display(), "bundle created");

        Ok(PortableBundle {
            id,
            label: self.label,
            description: self.description,
            prepend_text: self.prepend_text,
            append_text: self.append_text,
            entry: Some(entry),
            repository,
        })
    }
}

impl PortableBundle<ScopeRepository> {
    /// Reassemble a stored bundle from its record and scope
    pub(crate) fn from_record(record: BundleRecord, repository: ScopeRepository) -> Result<Self> {
        let entry = record
            .filepath_executable
            .as_deref()
            .map(EntryPath::parse)
            .transpose()?;

        Ok(Self {
            id: record.id,
            label: record.label,
            description: record.description,
            prepend_text: record.prepend_text,
            append_text: record.append_text,
            entry,
            repository,
        })
    }
}

impl<R: Repository> PortableBundle<R> {
    /// Create a bundle from `source`, with `entry` as the executable
    pub fn create(
        label: impl Into<String>,
        entry: &str,
        source: &Path,
        repository: R,
    ) -> Result<Self> {
        BundleBuilder::new(label).create(entry, source, repository)
    }

    /// Create a bundle from an exported description and its file dump
    pub fn from_description(description: &BundleDescription, repository: R) -> Result<Self> {
        BundleBuilder::from_description(description).create(
            &description.filepath_executable,
            &description.filepath_files,
            repository,
        )
    }

    /// Stable identity used in logs and error messages
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label shown to users; for portable bundles this is the label itself
    pub fn full_label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prepend_text(&self) -> &str {
        &self.prepend_text
    }

    pub fn append_text(&self) -> &str {
        &self.append_text
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub(crate) fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// The executable as recorded, without any check against the stored files
    pub fn executable_path(&self) -> Option<&EntryPath> {
        self.entry.as_ref()
    }

    /// Repoint the executable at another file of the bundle.
    ///
    /// Absolute or empty paths are rejected immediately; whether the file is
    /// actually stored is left to [`Self::validate`].
    pub fn set_executable_path(&mut self, value: &str) -> Result<()> {
        self.entry = Some(EntryPath::parse(value)?);
        Ok(())
    }

    /// Check that the executable is set and is one of the stored files
    pub fn validate(&self) -> Result<()> {
        let entry = self
            .entry
            .as_ref()
            .ok_or_else(|| entry_point_not_set(&self.label))?;

        let objects = self.repository.list_object_names()?;
        if !objects.contains(entry.as_str()) {
            return Err(entry_point_not_found(entry.as_str(), objects));
        }

        Ok(())
    }

    /// Whether the bundle can run on `computer`; portable bundles run anywhere
    pub fn can_run_on(&self, _computer: &Computer) -> bool {
        true
    }

    /// Refuse a staging folder that would shadow the executable
    pub fn check_working_directory<S>(&self, staged: &S) -> Result<()>
    where
        S: StagingFolder + ?Sized,
    {
        let entry = self
            .entry
            .as_ref()
            .ok_or_else(|| entry_point_not_set(&self.label))?;

        if staged.content_list()?.contains(entry.as_str()) {
            return Err(conflict(entry.as_str()));
        }

        Ok(())
    }

    /// Read every stored file and map it to its output path below `target`.
    ///
    /// Intermediate directories are created on the way. Nothing is written to
    /// the files themselves; see [`ExportManifest::materialize`]. On error the
    /// partial result is dropped.
    pub fn export(&self, target: &Path) -> Result<ExportManifest> {
        fs::create_dir_all(target).map_err(|e| io_at("failed to create", target, &e))?;

        let mut files = BTreeMap::new();
        for walk_entry in self.repository.walk()? {
            for filename in &walk_entry.filenames {
                let name = walk_entry.object_name(filename);
                let output = target.join(native_relative(&name));
                if let Some(parent) = output.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| io_at("failed to create", parent, &e))?;
                }

                let content = self.repository.get_object_content(&name)?;
                files.insert(output, content);
            }
        }

        info!(
            bundle = %self.id,
            target = %target.display(),
            files = files.len(),
            "repository files dumped to folder"
        );

        let executable = self.entry.as_ref().map(|e| target.join(e.to_path_buf()));
        Ok(ExportManifest::new(target.to_path_buf(), executable, files))
    }

    /// Structured description of the bundle as exported to `target`
    pub fn describe(&self, target: &Path) -> Result<BundleDescription> {
        let entry = self
            .entry
            .as_ref()
            .ok_or_else(|| entry_point_not_set(&self.label))?;

        Ok(BundleDescription {
            label: self.label.clone(),
            description: self.description.clone(),
            filepath_executable: entry.to_string(),
            filepath_files: target.to_path_buf(),
            prepend_text: self.prepend_text.clone(),
            append_text: self.append_text.clone(),
        })
    }

    /// Record persisted by the store for this bundle
    pub fn to_record(&self) -> BundleRecord {
        BundleRecord {
            id: self.id,
            label: self.label.clone(),
            description: self.description.clone(),
            filepath_executable: self.entry.as_ref().map(ToString::to_string),
            prepend_text: self.prepend_text.clone(),
            append_text: self.append_text.clone(),
        }
    }
}
