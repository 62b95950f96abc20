//! Workspace and collection domain models

use super::ids::CollectionUid;
use serde::{Deserialize, Serialize};

/// Workspace as listed by `GET /workspaces`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSummary {
    /// Workspace id
    pub id: String,

    /// Display name
    pub name: String,

    /// Visibility type reported by the API (personal, team, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Workspace detail as returned by `GET /workspaces/{id}`
///
/// `collections` stays optional so that a record without a collection list
/// can be told apart from an empty one when logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<CollectionSummary>>,
}

/// Collection entry of a workspace inventory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Stable identifier used for fetch and convert
    pub uid: CollectionUid,

    /// Display name, also used for name filtering and the output file name
    pub name: String,
}

impl CollectionSummary {
    /// Create a new collection summary
    pub fn new(uid: CollectionUid, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
        }
    }

    /// Output file name for this collection, `<sanitized name>.json`
    pub fn output_file_name(&self) -> String {
        format!("{}.json", sanitize_file_stem(&self.name))
    }
}

/// Replaces every character that is not ASCII alphanumeric with `_`
///
/// ```
/// use collex::domain::workspace::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("User API"), "User_API");
/// assert_eq!(sanitize_file_stem("v2/Auth (beta)"), "v2_Auth__beta_");
/// ```
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Converted document produced for one collection
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionArtifact(serde_json::Value);

impl ConversionArtifact {
    pub fn new(document: serde_json::Value) -> Self {
        Self(document)
    }

    /// The converted document
    pub fn document(&self) -> &serde_json::Value {
        &self.0
    }

    /// Pretty-printed UTF-8 JSON text of the document
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}
