//! Domain models and types for Collex.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`WorkspaceHandle`], [`CollectionUid`])
//! - **Domain models** ([`Workspace`], [`WorkspaceSummary`], [`CollectionSummary`], [`ConversionArtifact`])
//! - **Reports** ([`ExportReport`], [`ExportResult`])
//! - **Error types** ([`ExportError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExportError>`]:
//!
//! ```rust
//! use collex::domain::{ExportError, Result, WorkspaceHandle};
//!
//! fn parse(raw: &str) -> Result<WorkspaceHandle> {
//!     WorkspaceHandle::new(raw).map_err(ExportError::MissingArgument)
//! }
//!
//! assert!(parse("workspace-ws1").is_ok());
//! assert!(parse("  ").is_err());
//! ```

pub mod errors;
pub mod ids;
pub mod report;
pub mod result;
pub mod workspace;

// Re-export commonly used types for convenience
pub use errors::ExportError;
pub use ids::{CollectionUid, WorkspaceHandle};
pub use report::{ExportReport, ExportResult};
pub use result::Result;
pub use workspace::{CollectionSummary, ConversionArtifact, Workspace, WorkspaceSummary};
