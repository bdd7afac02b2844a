//! Store path utilities and constants
//!
//! ```text
//! <store-root>/
//! ├── config.yaml            optional settings
//! ├── objects/ab/cdef...     deduplicated blobs, named by BLAKE3 digest
//! ├── scopes/<id>.json       tree index of one bundle's repository scope
//! ├── bundles/<id>.yaml      persisted bundle records
//! └── tmp/                   staging area for atomic writes
//! ```

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{Result, storage};

/// Default store directory name under the user's data directory
const STORE_DIR: &str = "portacode";

/// Environment variable overriding the store location
pub const STORE_DIR_ENV: &str = "PORTACODE_STORE_DIR";

/// Blob subdirectory
pub const OBJECTS_DIR: &str = "objects";

/// Scope index subdirectory
pub const SCOPES_DIR: &str = "scopes";

/// Bundle record subdirectory
pub const BUNDLES_DIR: &str = "bundles";

/// Temporary file subdirectory
pub const TMP_DIR: &str = "tmp";

/// Optional settings file at the store root
pub const CONFIG_FILE: &str = "config.yaml";

/// Get the default store directory path
///
/// Uses the platform's standard data location with a `portacode` subdirectory.
/// Can be overridden with the `PORTACODE_STORE_DIR` environment variable.
pub fn default_store_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(STORE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir()
        .ok_or_else(|| storage("Could not determine the user data directory"))?;

    Ok(base.join(STORE_DIR))
}

/// Path of a blob: `objects/<first two hex chars>/<rest>`
pub fn object_path(root: &Path, oid: &str) -> PathBuf {
    let (shard, rest) = oid.split_at(oid.len().min(2));
    root.join(OBJECTS_DIR).join(shard).join(rest)
}

/// Path of a scope's tree index
pub fn scope_index_path(root: &Path, id: Uuid) -> PathBuf {
    root.join(SCOPES_DIR).join(format!("{id}.json"))
}

/// Path of a persisted bundle record
pub fn bundle_record_path(root: &Path, id: Uuid) -> PathBuf {
    root.join(BUNDLES_DIR).join(format!("{id}.yaml"))
}
