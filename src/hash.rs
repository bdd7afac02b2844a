//! BLAKE3 hashing utilities for stored objects and bundle fingerprints

use blake3::Hasher;

/// Hash prefix for BLAKE3 fingerprints shown to users
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate the object id (hex BLAKE3 digest) of a byte slice
pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Fingerprint a set of `(relative path, object id)` pairs.
///
/// Pairs must be supplied in sorted path order so the result is deterministic.
pub fn hash_tree<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut hasher = Hasher::new();
    for (path, oid) in entries {
        hasher.update(path.as_bytes());
        hasher.update(b"\0");
        hasher.update(oid.as_bytes());
        hasher.update(b"\0");
    }
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Verify a hash matches the expected value, ignoring the display prefix
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    let strip = |h: &str| h.strip_prefix(HASH_PREFIX).unwrap_or(h).to_string();
    strip(expected) == strip(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes_is_hex_digest() {
        let oid = hash_bytes(b"#!/bin/sh\necho hi\n");
        assert_eq!(oid.len(), 64);
        assert!(oid.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(oid, hash_bytes(b"#!/bin/sh\n"));
    }

    #[test]
    fn test_hash_tree_deterministic() {
        let entries = [("a.txt", "111"), ("lib/b.txt", "222")];
        let hash1 = hash_tree(entries);
        let hash2 = hash_tree(entries);
        assert_eq!(hash1, hash2);
        assert!(hash1.starts_with(HASH_PREFIX));
    }

    #[test]
    fn test_hash_tree_includes_paths() {
        let hash1 = hash_tree([("a.txt", "111")]);
        let hash2 = hash_tree([("b.txt", "111")]);
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_hash() {
        let hash1 = format!("{HASH_PREFIX}abc123");
        assert!(verify_hash(&hash1, &hash1.clone()));
        assert!(verify_hash(&hash1, "abc123"));
        assert!(!verify_hash(&hash1, "def456"));
    }
}
