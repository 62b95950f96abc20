//! Export coordinator - main orchestrator for the export process
//!
//! The pipeline is linear with one fan-out stage:
//!
//! ```text
//! validate input -> ensure output dir -> validate workspace -> list collections
//!     -> filter -> [per collection: convert -> write] -> aggregate
//! ```
//!
//! Everything before the per-collection stage is pipeline-fatal. Inside the
//! stage each collection yields its own `Result`, so one failure never stops
//! the rest of the batch.

use crate::adapters::api::ApiClient;
use crate::adapters::converter::{CommandConverter, Converter};
use crate::config::{ApiConfig, CollexConfig, SecretString};
use crate::core::export::convert::ConverterAdapter;
use crate::core::export::filter::filter_collections;
use crate::core::resolver::Resolver;
use crate::domain::{
    CollectionSummary, ExportError, ExportReport, ExportResult, Result, WorkspaceHandle,
    WorkspaceSummary,
};
use crate::{log_error_with_context, log_export_complete, log_export_start};
use secrecy::ExposeSecret;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Selection criteria for an export
///
/// Empty `ids` and `names` select every collection of the workspace.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Collection uids to export
    pub ids: Vec<String>,

    /// Case-insensitive name fragments to export
    pub names: Vec<String>,

    /// API key for this call; the configured key is used when `None`
    pub api_key: Option<SecretString>,
}

impl ExportOptions {
    pub fn new(ids: Vec<String>, names: Vec<String>) -> Self {
        Self {
            ids,
            names,
            api_key: None,
        }
    }

    /// Use `api_key` instead of the configured key
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }
}

/// Export coordinator
///
/// Holds configuration only; every call builds its own client and fetches
/// workspace data fresh.
///
/// # Example
///
/// ```no_run
/// use collex::config::load_config;
/// use collex::core::export::{ExportCoordinator, ExportOptions};
/// use std::path::Path;
///
/// # async fn example() -> collex::domain::Result<()> {
/// let config = load_config("collex.toml")?;
/// let coordinator = ExportCoordinator::from_config(&config)?;
///
/// let options = ExportOptions::new(vec![], vec!["user".to_string()]);
/// let report = coordinator
///     .export_workspace("workspace-ws1", Path::new("./openapi"), &options)
///     .await?;
/// println!("Exported {} collection(s)", report.successful());
/// # Ok(())
/// # }
/// ```
pub struct ExportCoordinator {
    api: ApiConfig,
    converter: Option<Arc<dyn Converter>>,
    work_dir: PathBuf,
}

impl ExportCoordinator {
    /// Create a coordinator able to list workspaces and collections
    ///
    /// Attach a converter with [`ExportCoordinator::with_converter`] before exporting.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            converter: None,
            work_dir: std::env::temp_dir(),
        }
    }

    /// Use `converter` for exports, writing transient files under `work_dir`
    pub fn with_converter(mut self, converter: Arc<dyn Converter>, work_dir: PathBuf) -> Self {
        self.converter = Some(converter);
        self.work_dir = work_dir;
        self
    }

    /// Create a coordinator backed by the configured converter executable
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Configuration`] if the converter executable cannot be found.
    pub fn from_config(config: &CollexConfig) -> Result<Self> {
        let converter = CommandConverter::from_command(&config.converter.command)?;
        tracing::debug!(
            converter = %converter.binary_path().display(),
            "Resolved converter executable"
        );

        Ok(Self::new(config.api.clone())
            .with_converter(Arc::new(converter), config.converter.resolved_work_dir()))
    }

    /// Client for one invocation; fails before any request when the key is missing
    ///
    /// `api_key` replaces the configured key for this client only.
    fn client(&self, api_key: Option<&SecretString>) -> Result<Arc<ApiClient>> {
        let client = match api_key {
            Some(key) => ApiClient::new(&ApiConfig {
                api_key: Some(key.clone()),
                ..self.api.clone()
            })?,
            None => ApiClient::new(&self.api)?,
        };
        Ok(Arc::new(client))
    }

    fn parse_handle(handle: &str) -> Result<WorkspaceHandle> {
        WorkspaceHandle::new(handle)
            .map_err(|_| ExportError::MissingArgument("workspace".to_string()))
    }

    /// Check the inputs every export needs, without any remote call
    ///
    /// The handle is checked first, then the key (`api_key` when given,
    /// else the configured one).
    ///
    /// # Errors
    ///
    /// [`ExportError::MissingArgument`] naming the first missing input.
    pub fn validate_input(
        &self,
        handle: &str,
        api_key: Option<&SecretString>,
    ) -> Result<WorkspaceHandle> {
        let handle = Self::parse_handle(handle)?;
        let key = api_key.or(self.api.api_key.as_ref());
        if key.map_or(true, |k| k.expose_secret().is_blank()) {
            return Err(ExportError::MissingArgument("API key".to_string()));
        }
        Ok(handle)
    }

    /// List every workspace the credential can see
    ///
    /// `api_key` replaces the configured key for this call.
    pub async fn list_workspaces(
        &self,
        api_key: Option<&SecretString>,
    ) -> Result<Vec<WorkspaceSummary>> {
        Resolver::new(self.client(api_key)?).list_workspaces().await
    }

    /// List the collections of a workspace
    ///
    /// `api_key` replaces the configured key for this call.
    ///
    /// # Errors
    ///
    /// [`ExportError::MissingArgument`] for an empty handle or key, then
    /// whatever [`Resolver::list_collections`] raises.
    pub async fn list_collections(
        &self,
        handle: &str,
        api_key: Option<&SecretString>,
    ) -> Result<Vec<CollectionSummary>> {
        let handle = self.validate_input(handle, api_key)?;
        Resolver::new(self.client(api_key)?)
            .list_collections(&handle)
            .await
    }

    /// Resolve and filter the collections an export would process
    ///
    /// # Errors
    ///
    /// Everything [`ExportCoordinator::list_collections`] raises, plus
    /// [`ExportError::NoMatch`] when the filters select nothing.
    pub async fn select_collections(
        &self,
        handle: &str,
        options: &ExportOptions,
    ) -> Result<Vec<CollectionSummary>> {
        let handle = self.validate_input(handle, options.api_key.as_ref())?;
        let resolver = Resolver::new(self.client(options.api_key.as_ref())?);
        Self::select(&resolver, &handle, options).await
    }

    async fn select(
        resolver: &Resolver,
        handle: &WorkspaceHandle,
        options: &ExportOptions,
    ) -> Result<Vec<CollectionSummary>> {
        let collections = resolver.list_collections(handle).await?;
        let selected = filter_collections(&collections, &options.ids, &options.names);

        tracing::info!(
            available = collections.len(),
            selected = selected.len(),
            ids = ?options.ids,
            names = ?options.names,
            "Filtered collections"
        );

        if selected.is_empty() {
            return Err(ExportError::NoMatch {
                ids: options.ids.clone(),
                names: options.names.clone(),
            });
        }
        Ok(selected)
    }

    /// Export the selected collections of a workspace into `output_dir`
    ///
    /// Each collection is written to `<output_dir>/<sanitized name>.json`.
    /// Collections are processed one at a time in inventory order.
    ///
    /// # Errors
    ///
    /// - pipeline-fatal errors (missing input, invalid credential or
    ///   workspace, empty inventory, no match) abort before any conversion
    /// - [`ExportError::BatchPartialFailure`] when at least one collection
    ///   failed; the embedded report lists every outcome and files written
    ///   for the other collections stay on disk
    pub async fn export_workspace(
        &self,
        handle: &str,
        output_dir: &Path,
        options: &ExportOptions,
    ) -> Result<ExportReport> {
        let start_time = Instant::now();

        let handle = self.validate_input(handle, options.api_key.as_ref())?;
        let client = self.client(options.api_key.as_ref())?;
        let converter = self.converter.clone().ok_or_else(|| {
            ExportError::Configuration("No converter configured for export".to_string())
        })?;

        tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
            ExportError::Io(format!(
                "Failed to create output directory {}: {e}",
                output_dir.display()
            ))
        })?;

        let resolver = Resolver::new(client.clone());
        let selected = Self::select(&resolver, &handle, options).await?;

        log_export_start!(handle.id(), selected.len());

        let adapter = ConverterAdapter::new(client, converter, self.work_dir.clone());
        let mut report = ExportReport::new();

        for collection in &selected {
            match Self::process_collection(&adapter, collection, output_dir).await {
                Ok(file) => {
                    tracing::info!(
                        collection = %collection.name,
                        uid = %collection.uid,
                        file = %file.display(),
                        "Exported collection"
                    );
                    report.push(ExportResult::succeeded(
                        &collection.name,
                        collection.uid.as_str(),
                        file,
                    ));
                }
                Err(e) => {
                    log_error_with_context!(
                        &e,
                        format!("collection={}, uid={}", collection.name, collection.uid)
                    );
                    report.push(ExportResult::failed(
                        &collection.name,
                        collection.uid.as_str(),
                        e.to_string(),
                    ));
                }
            }
        }

        let report = report.with_duration(start_time.elapsed());
        report.log_summary();
        log_export_complete!(report.successful(), report.duration);

        if report.is_successful() {
            Ok(report)
        } else {
            Err(ExportError::BatchPartialFailure(report))
        }
    }

    /// Convert one collection and write it; errors stay with this collection
    async fn process_collection(
        adapter: &ConverterAdapter,
        collection: &CollectionSummary,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let artifact = adapter.convert(&collection.uid).await?;

        let path = output_dir.join(collection.output_file_name());
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!(
                collection = %collection.name,
                file = %path.display(),
                "Overwriting existing file"
            );
        }

        tokio::fs::write(&path, artifact.to_pretty_json()?)
            .await
            .map_err(|e| ExportError::Io(format!("Failed to write {}: {e}", path.display())))?;

        Ok(path)
    }
}
