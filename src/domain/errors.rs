//! Domain error types
//!
//! This module defines the error hierarchy for Collex. Errors are
//! domain-specific and don't expose third-party types: HTTP client and
//! filesystem failures are flattened into owned messages at the adapter
//! boundary.

use super::report::ExportReport;
use thiserror::Error;

/// Main Collex error type
///
/// Every fallible operation in the library returns this type. Variants up to
/// and including [`ExportError::NoMatch`] are pipeline-fatal when raised by
/// the coordinator: they abort the export before any collection is converted.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A required input (workspace handle, API key) was empty or absent
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// The API rejected the credential (HTTP 401)
    #[error("Invalid API key: {0}")]
    InvalidCredential(String),

    /// The workspace does not exist (HTTP 404); carries the handle as the user typed it
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(String),

    /// The workspace has no collections, or its record carries no collection list
    #[error("No collections found in workspace: {0}")]
    EmptyInventory(String),

    /// Filtering left nothing to export
    #[error("No collections match the given filters (ids: {ids:?}, names: {names:?})")]
    NoMatch { ids: Vec<String>, names: Vec<String> },

    /// The collection body lacked the expected `collection` envelope
    #[error("Failed to fetch collection {0}: response has no collection envelope")]
    CollectionFetch(String),

    /// Any failure while converting a single collection
    #[error("Failed to convert collection {uid}: {source}")]
    Conversion {
        uid: String,
        #[source]
        source: Box<ExportError>,
    },

    /// At least one collection in the batch failed; the report lists every outcome
    #[error(
        "{} of {} collection(s) failed to export",
        .0.failed(),
        .0.total()
    )]
    BatchPartialFailure(ExportReport),

    /// The API could not be reached at all (DNS, refused connection, timeout)
    #[error("Network error: unable to reach API ({0})")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Remote {
        status: u16,
        message: String,
        body: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The external converter failed or could not be started
    #[error("Converter error: {0}")]
    Converter(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Wraps an error raised while converting `uid`
    pub fn conversion(uid: impl Into<String>, source: ExportError) -> Self {
        ExportError::Conversion {
            uid: uid.into(),
            source: Box::new(source),
        }
    }

    /// HTTP status of a [`ExportError::Remote`] error
    pub fn status(&self) -> Option<u16> {
        match self {
            ExportError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Process exit code used by the CLI for this error
    ///
    /// - 1: partial batch failure
    /// - 2: configuration or missing argument
    /// - 3: workspace, inventory or filter problem
    /// - 4: network, remote or credential problem
    /// - 5: anything else
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::BatchPartialFailure(_) => 1,
            ExportError::MissingArgument(_) | ExportError::Configuration(_) => 2,
            ExportError::WorkspaceNotFound(_)
            | ExportError::EmptyInventory(_)
            | ExportError::NoMatch { .. } => 3,
            ExportError::InvalidCredential(_)
            | ExportError::Network(_)
            | ExportError::Remote { .. } => 4,
            _ => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ExportResult;
    use std::path::PathBuf;

    #[test]
    fn test_missing_argument_display() {
        let err = ExportError::MissingArgument("workspace".to_string());
        assert_eq!(err.to_string(), "Missing required argument: workspace");
    }

    #[test]
    fn test_network_and_remote_are_distinct() {
        let network = ExportError::Network("connection refused".to_string());
        let remote = ExportError::Remote {
            status: 500,
            message: "Internal Server Error".to_string(),
            body: String::new(),
        };

        assert!(network.to_string().starts_with("Network error"));
        assert!(remote.to_string().starts_with("API error 500"));
        assert_eq!(network.status(), None);
        assert_eq!(remote.status(), Some(500));
    }

    #[test]
    fn test_conversion_keeps_source() {
        let err = ExportError::conversion("col1", ExportError::Converter("boom".to_string()));
        assert!(err.to_string().contains("col1"));
        assert!(err.to_string().contains("boom"));

        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "Converter error: boom");
    }

    #[test]
    fn test_batch_partial_failure_display() {
        let mut report = ExportReport::new();
        report.push(ExportResult::succeeded("A", "a", PathBuf::from("/tmp/A.json")));
        report.push(ExportResult::failed("B", "b", "boom"));

        let err = ExportError::BatchPartialFailure(report);
        assert_eq!(err.to_string(), "1 of 2 collection(s) failed to export");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExportError::MissingArgument("x".into()).exit_code(), 2);
        assert_eq!(ExportError::WorkspaceNotFound("x".into()).exit_code(), 3);
        assert_eq!(ExportError::InvalidCredential("x".into()).exit_code(), 4);
        assert_eq!(ExportError::Io("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ExportError = json_err.into();
        assert!(matches!(err, ExportError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExportError = toml_err.into();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
