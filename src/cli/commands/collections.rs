//! Collections command implementation

use crate::cli::commands::report_failure;
use crate::config::CollexConfig;
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the collections command
#[derive(Args, Debug)]
pub struct CollectionsArgs {
    /// Workspace id, optionally prefixed (e.g. `workspace-abc123`)
    #[arg(short, long, env = "COLLEX_WORKSPACE")]
    pub workspace: String,
}

impl CollectionsArgs {
    /// Execute the collections command
    pub async fn execute(&self, config: &CollexConfig) -> anyhow::Result<i32> {
        let coordinator = ExportCoordinator::new(config.api.clone());

        let collections = match coordinator.list_collections(&self.workspace, None).await {
            Ok(c) => c,
            Err(e) => return Ok(report_failure("Failed to list collections", &e)),
        };

        println!("{:<48} NAME", "UID");
        for collection in &collections {
            println!("{:<48} {}", collection.uid, collection.name);
        }

        Ok(0)
    }
}
