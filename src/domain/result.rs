//! Result type alias for Collex

use super::errors::ExportError;

/// Result type alias for Collex operations
///
/// ```
/// use collex::domain::result::Result;
/// use collex::domain::errors::ExportError;
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::MissingArgument("workspace".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;
