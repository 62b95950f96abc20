//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels (`RUST_LOG` overrides)
//! - Console output on stderr
//! - Optional JSON file logging with daily or hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use collex::logging::init_logging;
//! use collex::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a workspace export
///
/// # Example
///
/// ```no_run
/// use collex::log_export_start;
///
/// log_export_start!("ws1", 3);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($workspace_id:expr, $collections:expr) => {
        tracing::info!(
            workspace_id = %$workspace_id,
            collections = $collections,
            "Starting export"
        );
    };
}

/// Log the completion of a workspace export
///
/// # Example
///
/// ```no_run
/// use collex::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(2, Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use collex::log_error_with_context;
/// use collex::domain::ExportError;
///
/// let error = ExportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
