//! Per-collection conversion
//!
//! [`ConverterAdapter`] drives one conversion end to end:
//!
//! 1. fetch the collection body
//! 2. check for the `collection` envelope
//! 3. write the body to `<work_dir>/collection-<uid>.json`
//! 4. run the converter into `<work_dir>/openapi-<uid>.json`
//! 5. read and parse the converted document
//!
//! Both files are held by [`TransientFile`] guards and are gone when
//! `convert` returns, whichever step failed. Every failure comes back as
//! [`ExportError::Conversion`] naming the collection.

use crate::adapters::api::models::collection_name;
use crate::adapters::api::ApiClient;
use crate::adapters::converter::{ConvertOptions, Converter, TransientFile};
use crate::domain::{CollectionUid, ConversionArtifact, ExportError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fetches a collection and converts it through the injected [`Converter`]
pub struct ConverterAdapter {
    client: Arc<ApiClient>,
    converter: Arc<dyn Converter>,
    work_dir: PathBuf,
}

impl ConverterAdapter {
    /// Create an adapter writing transient files under `work_dir`
    pub fn new(client: Arc<ApiClient>, converter: Arc<dyn Converter>, work_dir: PathBuf) -> Self {
        Self {
            client,
            converter,
            work_dir,
        }
    }

    /// Directory transient files are written to
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Convert the collection `uid`
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Conversion`] wrapping the first failure. The
    /// transient files are removed before the error is returned.
    pub async fn convert(&self, uid: &CollectionUid) -> Result<ConversionArtifact> {
        match self.run(uid).await {
            Ok(artifact) => {
                tracing::debug!(uid = %uid, converter = self.converter.name(), "Collection converted");
                Ok(artifact)
            }
            Err(e) => {
                tracing::debug!(uid = %uid, error = %e, "Collection conversion failed");
                Err(ExportError::conversion(uid.as_str(), e))
            }
        }
    }

    async fn run(&self, uid: &CollectionUid) -> Result<ConversionArtifact> {
        let collection = self
            .client
            .get_collection(uid)
            .await?
            .ok_or_else(|| ExportError::CollectionFetch(uid.to_string()))?;

        let default_tag = collection_name(&collection)
            .unwrap_or(uid.as_str())
            .to_string();

        // Names derive from the uid alone; conversions must stay sequential.
        let safe_uid = uid.file_safe();
        let input = TransientFile::new(self.work_dir.join(format!("collection-{safe_uid}.json")));
        let output = TransientFile::new(self.work_dir.join(format!("openapi-{safe_uid}.json")));

        tokio::fs::create_dir_all(&self.work_dir).await?;
        tokio::fs::write(input.path(), serde_json::to_vec(&collection)?).await?;

        self.converter
            .convert(input.path(), output.path(), &ConvertOptions::json(default_tag))
            .await?;

        let text = tokio::fs::read_to_string(output.path()).await?;
        let document = serde_json::from_str(&text)?;

        Ok(ConversionArtifact::new(document))
    }
}
