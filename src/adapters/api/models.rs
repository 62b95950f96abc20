//! Wire models for the collection API
//!
//! Response envelopes are deliberately lenient: the inner records are
//! optional so callers can raise their own domain error when a field is
//! missing instead of failing deserialization.

use crate::domain::{Workspace, WorkspaceSummary};
use serde::Deserialize;
use serde_json::Value;

/// `GET /workspaces`
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspacesResponse {
    #[serde(default)]
    pub workspaces: Vec<WorkspaceSummary>,
}

/// `GET /workspaces/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceResponse {
    #[serde(default)]
    pub workspace: Option<Workspace>,
}

/// `GET /collections/{uid}`
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionResponse {
    #[serde(default)]
    pub collection: Option<Value>,
}

/// Extracts `error.message` from an API error body, if there is one
///
/// ```
/// use collex::adapters::api::models::error_message;
///
/// let body = r#"{"error":{"name":"instanceNotFoundError","message":"Workspace not found"}}"#;
/// assert_eq!(error_message(body).as_deref(), Some("Workspace not found"));
/// assert_eq!(error_message("<html>"), None);
/// ```
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Declared name of a collection body (`info.name`)
pub fn collection_name(collection: &Value) -> Option<&str> {
    collection
        .get("info")
        .and_then(|info| info.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
}
