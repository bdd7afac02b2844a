//! Portacode - portable executable bundles
//!
//! A portable bundle is an executable together with every auxiliary file it
//! needs, stored in a content-addressed repository scope so it can be sent to
//! any machine and dumped back to a plain folder.
//!
//! ```no_run
//! use portacode::{BundleBuilder, Store};
//! # fn main() -> portacode::Result<()> {
//! let store = Store::open("/tmp/portacode")?;
//! let bundle = store.create_bundle(BundleBuilder::new("my-code"), "run.sh", "./code".as_ref())?;
//! bundle.validate()?;
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod computer;
pub mod config;
pub mod error;
pub mod hash;
pub mod path_utils;
pub mod repository;
pub mod staging;
pub mod store;
pub mod transaction;

pub use bundle::{
    BundleBuilder, BundleDescription, EntryPath, ExportManifest, OverwritePolicy, PortableBundle,
};
pub use computer::Computer;
pub use error::{PortacodeError, Result};
pub use repository::{MemoryRepository, Repository};
pub use staging::{SandboxFolder, StagingFolder};
pub use store::Store;
