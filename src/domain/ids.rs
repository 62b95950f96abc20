//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers the remote API hands out, so a
//! workspace id can never be passed where a collection uid is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefixes users commonly paste in front of a workspace id
const WORKSPACE_PREFIXES: [&str; 4] = ["workspace-", "workspace:", "workspace/", "workspaces/"];

/// Strips surrounding whitespace and known workspace prefixes
///
/// Prefixes are removed until none remain, so the result is a fixpoint:
/// `normalize_workspace_id(normalize_workspace_id(x)) == normalize_workspace_id(x)`.
///
/// ```
/// use collex::domain::ids::normalize_workspace_id;
///
/// assert_eq!(normalize_workspace_id("  workspace:abc-123 "), "abc-123");
/// assert_eq!(normalize_workspace_id("workspaces/abc"), "abc");
/// ```
pub fn normalize_workspace_id(raw: &str) -> String {
    let mut current = raw.trim();
    loop {
        let stripped = WORKSPACE_PREFIXES
            .iter()
            .find_map(|prefix| current.strip_prefix(prefix))
            .map(str::trim);

        match stripped {
            Some(rest) => current = rest,
            None => return current.to_string(),
        }
    }
}

/// Workspace handle as supplied by the user
///
/// Keeps both the original text (used in error messages, so the user sees
/// what they typed) and the normalized id (used in request paths).
///
/// # Examples
///
/// ```
/// use collex::domain::ids::WorkspaceHandle;
///
/// let handle = WorkspaceHandle::new("workspace-ws1").unwrap();
/// assert_eq!(handle.id(), "ws1");
/// assert_eq!(handle.original(), "workspace-ws1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceHandle {
    original: String,
    id: String,
}

impl WorkspaceHandle {
    /// Creates a handle, rejecting input that normalizes to nothing
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let original = raw.into();
        let id = normalize_workspace_id(&original);
        if id.is_empty() {
            return Err("Workspace handle cannot be empty".to_string());
        }
        Ok(Self { original, id })
    }

    /// Normalized workspace id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Handle exactly as supplied
    pub fn original(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for WorkspaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl FromStr for WorkspaceHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Collection UID newtype wrapper
///
/// The stable identifier used to fetch and convert a collection,
/// e.g. `12345-7b1e7c4a-9d5f-4c3a-8f2e-0a1b2c3d4e5f`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionUid(String);

impl CollectionUid {
    /// Creates a new CollectionUid from a string
    pub fn new(uid: impl Into<String>) -> Result<Self, String> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err("Collection UID cannot be empty".to_string());
        }
        Ok(Self(uid))
    }

    /// Returns the collection UID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form of the uid safe to embed in a file name
    pub fn file_safe(&self) -> String {
        self.0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for CollectionUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionUid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionUid {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CollectionUid> for String {
    fn from(uid: CollectionUid) -> Self {
        uid.0
    }
}

impl AsRef<str> for CollectionUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
