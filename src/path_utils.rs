//! Cross-platform path utilities for Portacode
//!
//! Stored object names, entry points and staged file listings all use the same
//! canonical relative form: `/` between segments, no `.` components, no empty
//! segments. Comparisons between them are plain string equality.
//!
//! Separators follow the host platform. On Windows both `/` and `\` split
//! segments; elsewhere `\` is an ordinary filename character, so every file
//! that can be ingested can also be named as the entry point.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, invalid_input};

/// Characters that are unsafe in filesystem paths
/// Replaced with hyphens and collapsed: `/`, `\`, `:`, `*`, `?`, `"`, `<`, `>`, `|`
const PATH_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Whether `c` separates path segments on this platform
pub fn is_separator(c: char) -> bool {
    if cfg!(windows) { c == '/' || c == '\\' } else { c == '/' }
}

/// Make a bundle label safe for use as a directory or file name.
///
/// Replaces unsafe characters with hyphens, collapses consecutive hyphens and
/// trims leading/trailing ones. Returns "unknown" if the result is empty.
pub fn make_path_safe(name: &str) -> String {
    let key: String = name
        .chars()
        .map(|c| {
            if PATH_UNSAFE_CHARS.contains(&c) {
                '-'
            } else {
                c
            }
        })
        .collect();

    let key = key
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if key.is_empty() || key == "." || key == ".." {
        "unknown".to_string()
    } else {
        key
    }
}

/// Whether a relative-path string is absolute on this platform.
///
/// A leading `/` always counts. On Windows a leading `\` and drive or UNC
/// prefixes count as well.
pub fn is_absolute_str(value: &str) -> bool {
    if value.starts_with('/') {
        return true;
    }
    if cfg!(windows) {
        let bytes = value.as_bytes();
        if value.starts_with('\\')
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
        {
            return true;
        }
    }
    Path::new(value).is_absolute()
}

/// Normalize a relative path string to its canonical form.
///
/// Fails for empty, absolute, or parent-escaping (`..`) inputs.
pub fn canonical_relative(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(invalid_input("the relative path must not be empty"));
    }
    if is_absolute_str(value) {
        return Err(invalid_input(format!(
            "the relative path `{value}` should not be absolute"
        )));
    }

    let mut segments = Vec::new();
    for segment in value.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                return Err(invalid_input(format!(
                    "the relative path `{value}` must not contain `..`"
                )));
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Err(invalid_input(format!(
            "the relative path `{value}` does not name a file"
        )));
    }

    Ok(segments.join("/"))
}

/// Filesystem path of a canonical relative name
pub fn native_relative(name: &str) -> PathBuf {
    name.split('/').collect()
}

/// Compute the canonical relative key of `path` below `root`.
///
/// Returns `Ok(None)` for `root` itself or for paths outside of it. A segment
/// that is not valid UTF-8 is an error naming the offending path.
pub fn relative_key(root: &Path, path: &Path) -> Result<Option<String>> {
    let Ok(relative) = path.strip_prefix(root) else {
        return Ok(None);
    };

    let mut segments = Vec::new();
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            let segment = segment.to_str().ok_or_else(|| {
                invalid_input(format!(
                    "the file name `{}` is not valid UTF-8",
                    path.display()
                ))
            })?;
            segments.push(segment);
        }
    }

    if segments.is_empty() {
        Ok(None)
    } else {
        Ok(Some(segments.join("/")))
    }
}
