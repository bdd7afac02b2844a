//! Persisted bundle records (`bundles/<id>.yaml`)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata of a stored bundle; its files live in the matching scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRecord {
    pub id: Uuid,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Raw entry point; checked when the record is turned back into a bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath_executable: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prepend_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub append_text: String,
}

impl BundleRecord {
    /// Whether `selector` is the id or an unambiguous-looking prefix of it
    pub fn matches_id(&self, selector: &str) -> bool {
        selector.len() >= 4 && self.id.to_string().starts_with(&selector.to_lowercase())
    }
}
