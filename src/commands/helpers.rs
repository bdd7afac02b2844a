//! Command helper utilities

use std::path::PathBuf;

use portacode::Store;
use portacode::config::resolve_store_dir;
use portacode::error::Result;

/// Open the store selected on the command line, or the default one
pub fn open_store(store: Option<PathBuf>) -> Result<Store> {
    Store::open(resolve_store_dir(store)?)
}
