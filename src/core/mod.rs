//! Core business logic for Collex.
//!
//! # Modules
//!
//! - [`resolver`] - Workspace validation and collection inventory
//! - [`export`] - Filtering, conversion and export coordination
//!
//! # Export Workflow
//!
//! 1. **Validate input**: workspace handle and API key must be present
//! 2. **Resolve**: fetch the workspace and its collection inventory
//! 3. **Filter**: keep collections matching the requested uids or names
//! 4. **Convert**: run each collection through the converter, one at a time
//! 5. **Write**: store each document as `<output_dir>/<name>.json`
//! 6. **Report**: aggregate per-collection outcomes
//!
//! # Example
//!
//! ```rust,no_run
//! use collex::config::load_config;
//! use collex::core::export::{ExportCoordinator, ExportOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("collex.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config)?;
//!
//! let report = coordinator
//!     .export_workspace("ws1", &config.export.output_dir, &ExportOptions::default())
//!     .await?;
//!
//! println!("Total: {}", report.total());
//! println!("Successful: {}", report.successful());
//! println!("Failed: {}", report.failed());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod resolver;
