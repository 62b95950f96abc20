//! Export command implementation
//!
//! This module implements the `export` command, converting the collections
//! of one workspace into OpenAPI documents.

use crate::cli::commands::report_failure;
use crate::config::CollexConfig;
use crate::core::export::{ExportCoordinator, ExportOptions};
use crate::domain::{ExportError, ExportReport, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Workspace id, optionally prefixed (e.g. `workspace-abc123`)
    #[arg(short, long, env = "COLLEX_WORKSPACE")]
    pub workspace: Option<String>,

    /// Output directory (overrides `export.output_dir`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Collection uid(s) to export (comma-separated)
    #[arg(long, value_name = "UIDS")]
    pub ids: Option<String>,

    /// Collection name fragment(s) to export (comma-separated, case-insensitive)
    #[arg(long, value_name = "NAMES")]
    pub names: Option<String>,

    /// Dry run mode - resolve and filter without converting anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Selection criteria from `--ids` and `--names`
    pub fn options(&self) -> ExportOptions {
        ExportOptions::new(
            split_list(self.ids.as_deref()),
            split_list(self.names.as_deref()),
        )
    }

    /// Execute the export command
    pub async fn execute(&self, config: &CollexConfig) -> anyhow::Result<i32> {
        let handle = self.workspace.as_deref().unwrap_or_default();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());
        let options = self.options();

        tracing::info!(
            workspace = %handle,
            output_dir = %output_dir.display(),
            ids = ?options.ids,
            names = ?options.names,
            dry_run = self.dry_run,
            "Starting export command"
        );

        if self.dry_run {
            return Ok(self.dry_run(config, handle, &output_dir, &options).await);
        }

        let coordinator = match Self::coordinator(config, handle) {
            Ok(c) => c,
            Err(e) => return Ok(report_failure("Failed to initialize export", &e)),
        };

        println!("🚀 Exporting workspace {handle} to {}", output_dir.display());
        println!();

        let exit_code = match coordinator
            .export_workspace(handle, &output_dir, &options)
            .await
        {
            Ok(report) => {
                print_report(&report);
                println!("✅ Export completed successfully!");
                0
            }
            Err(ExportError::BatchPartialFailure(report)) => {
                print_report(&report);
                println!("⚠️  Export completed with failures");
                1
            }
            Err(e) => report_failure("Export failed", &e),
        };

        Ok(exit_code)
    }

    /// Coordinator for a real export; missing inputs win over a missing converter
    fn coordinator(config: &CollexConfig, handle: &str) -> Result<ExportCoordinator> {
        ExportCoordinator::new(config.api.clone()).validate_input(handle, None)?;
        ExportCoordinator::from_config(config)
    }

    async fn dry_run(
        &self,
        config: &CollexConfig,
        handle: &str,
        output_dir: &Path,
        options: &ExportOptions,
    ) -> i32 {
        println!("🔍 DRY RUN MODE - nothing will be converted or written");
        println!();

        let coordinator = ExportCoordinator::new(config.api.clone());
        let selected = match coordinator.select_collections(handle, options).await {
            Ok(selected) => selected,
            Err(e) => return report_failure("Dry run failed", &e),
        };

        println!("Would export {} collection(s):", selected.len());
        for collection in &selected {
            println!(
                "  - {} ({}) -> {}",
                collection.name,
                collection.uid,
                output_dir.join(collection.output_file_name()).display()
            );
        }
        println!();
        0
    }
}

/// Split a comma-separated CLI value, dropping blank entries
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn print_report(report: &ExportReport) {
    println!("📊 Export Summary:");
    println!("  Total Collections: {}", report.total());
    println!("  Successful: {}", report.successful());
    println!("  Failed: {}", report.failed());
    println!("  Duration: {:.2}s", report.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", report.success_rate());
    println!();

    for result in &report.results {
        if let Some(file) = result.file() {
            println!("  ✓ {} -> {}", result.name(), file.display());
        }
    }

    if report.failed() > 0 {
        println!();
        println!("⚠️  Errors encountered:");
        for failure in report.failures() {
            println!(
                "  - {} ({}): {}",
                failure.name(),
                failure.uid(),
                failure.error().unwrap_or_default()
            );
        }
    }
    println!();
}
