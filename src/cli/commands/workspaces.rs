//! Workspaces command implementation

use crate::cli::commands::report_failure;
use crate::config::CollexConfig;
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the workspaces command
#[derive(Args, Debug)]
pub struct WorkspacesArgs {}

impl WorkspacesArgs {
    /// Execute the workspaces command
    pub async fn execute(&self, config: &CollexConfig) -> anyhow::Result<i32> {
        let coordinator = ExportCoordinator::new(config.api.clone());

        let workspaces = match coordinator.list_workspaces(None).await {
            Ok(w) => w,
            Err(e) => return Ok(report_failure("Failed to list workspaces", &e)),
        };

        if workspaces.is_empty() {
            println!("No workspaces found");
            return Ok(0);
        }

        println!("{:<40} {:<12} NAME", "ID", "TYPE");
        for workspace in &workspaces {
            println!(
                "{:<40} {:<12} {}",
                workspace.id,
                workspace.kind.as_deref().unwrap_or("-"),
                workspace.name
            );
        }

        Ok(0)
    }
}
