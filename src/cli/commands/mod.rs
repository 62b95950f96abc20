//! CLI command implementations
//!
//! Commands return the process exit code; see [`ExportError::exit_code`].

pub mod collections;
pub mod export;
pub mod validate;
pub mod workspaces;

use crate::domain::ExportError;
use crate::log_error_with_context;

/// Log and print a command failure, returning its exit code
pub(crate) fn report_failure(context: &str, err: &ExportError) -> i32 {
    log_error_with_context!(err, context);
    eprintln!("❌ {context}: {err}");
    err.exit_code()
}
