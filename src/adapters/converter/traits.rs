//! Converter trait definition
//!
//! The conversion algorithm itself is an external collaborator. Collex only
//! relies on this contract: given a file holding a collection body, write
//! the converted document to the output path or fail.

use crate::domain::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;

/// Serialization of the converted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Options passed to the converter for one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Tag applied to operations that carry none, derived from the collection name
    pub default_tag: String,

    /// Requested output serialization
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// JSON output with the given default tag
    pub fn json(default_tag: impl Into<String>) -> Self {
        Self {
            default_tag: default_tag.into(),
            output_format: OutputFormat::Json,
        }
    }
}

/// Converts a collection file into an interchange document
///
/// # Example
///
/// ```no_run
/// use collex::adapters::converter::{CommandConverter, ConvertOptions, Converter};
/// use std::path::Path;
///
/// # async fn example() -> collex::domain::Result<()> {
/// let converter = CommandConverter::from_command("p2o")?;
/// converter
///     .convert(
///         Path::new("collection.json"),
///         Path::new("openapi.json"),
///         &ConvertOptions::json("User API"),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert the collection at `input`, writing the document to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the converter cannot run or rejects the input.
    async fn convert(&self, input: &Path, output: &Path, options: &ConvertOptions) -> Result<()>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
