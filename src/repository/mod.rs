//! Repository scope contract
//!
//! A repository scope is the content-addressed storage region owned by one
//! bundle. The bundle only ever talks to its scope through [`Repository`];
//! how objects are deduplicated or laid out on disk is up to the
//! implementation (see [`crate::store::ScopeRepository`] and
//! [`MemoryRepository`]).

mod memory;

pub use memory::MemoryRepository;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::Result;

/// One step of a depth-first walk over a repository scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Canonical directory name relative to the scope root; empty for the root
    pub directory: String,
    /// Names of the direct subdirectories, sorted
    pub dirnames: Vec<String>,
    /// Names of the files directly inside `directory`, sorted
    pub filenames: Vec<String>,
}

impl WalkEntry {
    /// Canonical object name of `filename` inside this directory
    pub fn object_name(&self, filename: &str) -> String {
        if self.directory.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{filename}", self.directory)
        }
    }
}

/// Storage operations a bundle needs from its repository scope
pub trait Repository {
    /// Ingest every file below `source`, preserving relative paths
    fn put_tree(&mut self, source: &Path) -> Result<()>;

    /// Full set of stored object paths, in canonical relative form
    fn list_object_names(&self) -> Result<BTreeSet<String>>;

    /// Raw content of the object stored at `path`
    fn get_object_content(&self, path: &str) -> Result<Vec<u8>>;

    /// Depth-first, top-down walk over the stored objects
    fn walk(&self) -> Result<Vec<WalkEntry>> {
        Ok(walk_object_names(&self.list_object_names()?))
    }

    /// Drop every object reference held by this scope
    fn erase(&mut self) -> Result<()>;
}

impl<R: Repository + ?Sized> Repository for &mut R {
    fn put_tree(&mut self, source: &Path) -> Result<()> {
        (**self).put_tree(source)
    }

    fn list_object_names(&self) -> Result<BTreeSet<String>> {
        (**self).list_object_names()
    }

    fn get_object_content(&self, path: &str) -> Result<Vec<u8>> {
        (**self).get_object_content(path)
    }

    fn walk(&self) -> Result<Vec<WalkEntry>> {
        (**self).walk()
    }

    fn erase(&mut self) -> Result<()> {
        (**self).erase()
    }
}

#[derive(Default)]
struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    files: Vec<String>,
}

/// Group a flat set of relative object paths into a top-down directory walk.
///
/// The root comes first, each directory is followed by its subdirectories in
/// name order.
pub fn walk_object_names(names: &BTreeSet<String>) -> Vec<WalkEntry> {
    let mut root = DirNode::default();
    for name in names {
        let mut segments: Vec<&str> = name.split('/').collect();
        let Some(file) = segments.pop() else {
            continue;
        };
        let mut node = &mut root;
        for segment in segments {
            node = node.dirs.entry(segment.to_string()).or_default();
        }
        node.files.push(file.to_string());
    }

    let mut entries = Vec::new();
    collect_walk(&root, String::new(), &mut entries);
    entries
}

fn collect_walk(node: &DirNode, directory: String, entries: &mut Vec<WalkEntry>) {
    let mut filenames = node.files.clone();
    filenames.sort();
    entries.push(WalkEntry {
        directory: directory.clone(),
        dirnames: node.dirs.keys().cloned().collect(),
        filenames,
    });
    for (name, child) in &node.dirs {
        let child_dir = if directory.is_empty() {
            name.clone()
        } else {
            format!("{directory}/{name}")
        };
        collect_walk(child, child_dir, entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_walk_root_first() {
        let walk = walk_object_names(&names(&["run.sh", "lib/helper.py", "lib/data/x.bin"]));

        assert_eq!(walk.len(), 3);
        assert_eq!(walk[0].directory, "");
        assert_eq!(walk[0].dirnames, vec!["lib".to_string()]);
        assert_eq!(walk[0].filenames, vec!["run.sh".to_string()]);
        assert_eq!(walk[1].directory, "lib");
        assert_eq!(walk[1].filenames, vec!["helper.py".to_string()]);
        assert_eq!(walk[2].directory, "lib/data");
        assert_eq!(walk[2].object_name("x.bin"), "lib/data/x.bin");
        assert!(walk[2].dirnames.is_empty());
    }

    #[test]
    fn test_walk_empty_scope() {
        let walk = walk_object_names(&BTreeSet::new());
        assert_eq!(walk.len(), 1);
        assert!(walk[0].filenames.is_empty());
        assert!(walk[0].dirnames.is_empty());
    }

    #[test]
    fn test_walk_depth_first_order() {
        let walk = walk_object_names(&names(&["a/x/1", "a/2", "b/3"]));
        let dirs: Vec<String> = walk.into_iter().map(|e| e.directory).collect();
        assert_eq!(dirs, vec!["", "a", "a/x", "b"]);
    }
}
