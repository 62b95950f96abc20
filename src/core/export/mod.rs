//! Export orchestration
//!
//! This module provides the export pipeline for Collex:
//! - Collection selection by uid and name
//! - Per-collection conversion through the external converter
//! - Export coordination and reporting

pub mod convert;
pub mod coordinator;
pub mod filter;

pub use crate::domain::{ExportReport, ExportResult};
pub use convert::ConverterAdapter;
pub use coordinator::{ExportCoordinator, ExportOptions};
pub use filter::filter_collections;
