//! Export report and per-collection results
//!
//! An [`ExportReport`] is the ordered record of every collection an export
//! attempted. It is returned on success and embedded in
//! [`ExportError::BatchPartialFailure`](super::ExportError::BatchPartialFailure)
//! when any collection failed.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of exporting one collection
///
/// A result either carries the written file or the error message, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResult {
    /// Collection converted and written to `file`
    Succeeded {
        name: String,
        uid: String,
        file: PathBuf,
    },
    /// Collection could not be converted or written
    Failed {
        name: String,
        uid: String,
        error: String,
    },
}

impl ExportResult {
    /// Create a successful result
    pub fn succeeded(name: impl Into<String>, uid: impl Into<String>, file: PathBuf) -> Self {
        ExportResult::Succeeded {
            name: name.into(),
            uid: uid.into(),
            file,
        }
    }

    /// Create a failed result
    pub fn failed(
        name: impl Into<String>,
        uid: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        ExportResult::Failed {
            name: name.into(),
            uid: uid.into(),
            error: error.into(),
        }
    }

    /// Collection display name
    pub fn name(&self) -> &str {
        match self {
            ExportResult::Succeeded { name, .. } | ExportResult::Failed { name, .. } => name,
        }
    }

    /// Collection uid
    pub fn uid(&self) -> &str {
        match self {
            ExportResult::Succeeded { uid, .. } | ExportResult::Failed { uid, .. } => uid,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ExportResult::Succeeded { .. })
    }

    /// Written file, for successful results
    pub fn file(&self) -> Option<&Path> {
        match self {
            ExportResult::Succeeded { file, .. } => Some(file),
            ExportResult::Failed { .. } => None,
        }
    }

    /// Error message, for failed results
    pub fn error(&self) -> Option<&str> {
        match self {
            ExportResult::Succeeded { .. } => None,
            ExportResult::Failed { error, .. } => Some(error),
        }
    }
}

/// Report of one export invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Per-collection outcomes, in processing order
    pub results: Vec<ExportResult>,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Append an outcome
    pub fn push(&mut self, result: ExportResult) {
        self.results.push(result);
    }

    /// Number of attempted collections
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.success()).count()
    }

    /// Check if every attempted collection was exported
    pub fn is_successful(&self) -> bool {
        self.failed() == 0
    }

    /// Iterate over the failed outcomes
    pub fn failures(&self) -> impl Iterator<Item = &ExportResult> {
        self.results.iter().filter(|r| !r.success())
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        (self.successful() as f64 / self.total() as f64) * 100.0
    }

    /// Log the report
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total(),
            successful = self.successful(),
            failed = self.failed(),
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export summary"
        );

        for failure in self.failures() {
            tracing::warn!(
                collection = %failure.name(),
                uid = %failure.uid(),
                error = failure.error().unwrap_or_default(),
                "Collection export failed"
            );
        }
    }
}
