//! Property tests for entry-point paths, staging conflicts and export

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use portacode::path_utils::native_relative;
use portacode::{
    BundleBuilder, EntryPath, MemoryRepository, OverwritePolicy, PortableBundle, PortacodeError,
    Store,
};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}(\\.[a-z]{1,3})?"
}

fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("/"))
}

/// File or directory name with spaces, dots and dashes; on unix also a
/// backslash and a non-ASCII letter
#[cfg(unix)]
const TREE_SEGMENT: &str = r"[a-zé\\]([a-z0-9 é\\_.-]{0,6}[a-z0-9é])?";
#[cfg(not(unix))]
const TREE_SEGMENT: &str = r"[a-z]([a-z0-9 _.-]{0,6}[a-z0-9])?";

fn tree_path() -> impl Strategy<Value = String> {
    prop::collection::vec(TREE_SEGMENT, 1..4).prop_map(|segments| segments.join("/"))
}

/// Files keyed by relative name. A name that is also a directory of another
/// name is dropped.
fn file_tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(tree_path(), prop::collection::vec(any::<u8>(), 0..64), 1..8)
        .prop_map(|mut files| {
            let names: Vec<String> = files.keys().cloned().collect();
            files.retain(|name, _| {
                let prefix = format!("{name}/");
                !names.iter().any(|other| other.starts_with(&prefix))
            });
            files
        })
}

fn bundle_with_entry(entry: &str) -> PortableBundle<MemoryRepository> {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(temp.path().join("placeholder"), "x").unwrap();
    PortableBundle::create("prop", entry, temp.path(), MemoryRepository::new()).unwrap()
}

proptest! {
    #[test]
    fn absolute_paths_are_rejected(path in relative_path()) {
        let absolute = format!("/{path}");
        prop_assert!(
            matches!(
                EntryPath::parse(&absolute),
                Err(PortacodeError::InvalidInput { .. })
            ),
            "accepted {}",
            absolute
        );

        let mut bundle = bundle_with_entry("placeholder");
        prop_assert!(bundle.set_executable_path(&absolute).is_err());
        prop_assert_eq!(bundle.executable_path().unwrap().as_str(), "placeholder");
    }

    #[test]
    fn relative_paths_are_accepted(path in relative_path()) {
        let parsed = EntryPath::parse(&path).unwrap();
        prop_assert_eq!(parsed.as_str(), path.as_str());
    }

    #[test]
    fn conflict_iff_entry_is_staged(
        entry in relative_path(),
        staged in prop::collection::btree_set(relative_path(), 0..6),
    ) {
        let bundle = bundle_with_entry(&entry);
        let result = bundle.check_working_directory(&staged);

        if staged.contains(&entry) {
            prop_assert!(
                matches!(result, Err(PortacodeError::Conflict { ref path }) if *path == entry),
                "expected a conflict for {}",
                entry
            );
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn single_file_staging(entry in relative_path(), other in relative_path()) {
        let bundle = bundle_with_entry(&entry);
        let staged: BTreeSet<String> = [other.clone()].into_iter().collect();
        prop_assert_eq!(
            bundle.check_working_directory(&staged).is_err(),
            other == entry
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn export_reproduces_every_file(files in file_tree()) {
        let temp = tempfile::TempDir::new().unwrap();
        let src = temp.path().join("code");
        for (name, content) in &files {
            let path = src.join(native_relative(name));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }
        let entry = files.keys().next().unwrap().clone();

        let store = Store::open(temp.path().join("store")).unwrap();
        let bundle = store
            .create_bundle(BundleBuilder::new("tree"), &entry, &src)
            .unwrap();
        bundle.validate().unwrap();

        let target = temp.path().join("out");
        let manifest = bundle.export(&target).unwrap();
        prop_assert_eq!(manifest.len(), files.len());
        let expected_executable = target.join(native_relative(&entry));
        prop_assert_eq!(manifest.executable(), Some(expected_executable.as_path()));
        manifest.materialize(OverwritePolicy::Fail).unwrap();

        for (name, content) in &files {
            let exported = fs::read(target.join(native_relative(name))).unwrap();
            prop_assert_eq!(&exported, content, "content of {} changed", name);
        }
    }
}
