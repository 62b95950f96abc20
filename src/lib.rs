// Collex - API collection to OpenAPI exporter
// Copyright (c) 2025 Collex Contributors
// Licensed under the MIT License

//! # Collex - API collection to OpenAPI exporter
//!
//! Collex exports the API collections of a remote workspace as OpenAPI
//! documents, one file per collection.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Resolving** a workspace and its collection inventory over the remote API
//! - **Selecting** collections by uid or case-insensitive name fragment
//! - **Converting** each collection through an external converter executable
//! - **Writing** one pretty-printed JSON document per collection
//!
//! ## Architecture
//!
//! Collex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (resolution, filtering, export coordination)
//! - [`adapters`] - External integrations (remote API, converter)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use collex::config::load_config;
//! use collex::core::export::{ExportCoordinator, ExportOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("collex.toml")?;
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!
//!     let report = coordinator
//!         .export_workspace("workspace-ws1", &config.export.output_dir, &ExportOptions::default())
//!         .await?;
//!
//!     println!("Exported {} collection(s)", report.successful());
//!     Ok(())
//! }
//! ```
//!
//! ## Partial Failures
//!
//! One collection failing to convert never stops the others. When any
//! collection fails, `export_workspace` returns
//! [`domain::ExportError::BatchPartialFailure`] carrying the full report;
//! files written for the successful collections stay on disk:
//!
//! ```rust,no_run
//! use collex::domain::ExportError;
//! # use collex::core::export::{ExportCoordinator, ExportOptions};
//! # async fn example(coordinator: ExportCoordinator) {
//! match coordinator
//!     .export_workspace("ws1", std::path::Path::new("out"), &ExportOptions::default())
//!     .await
//! {
//!     Ok(report) => println!("{} exported", report.successful()),
//!     Err(ExportError::BatchPartialFailure(report)) => {
//!         for failure in report.failures() {
//!             eprintln!("{}: {}", failure.name(), failure.error().unwrap_or_default());
//!         }
//!     }
//!     Err(e) => eprintln!("Export failed: {e}"),
//! }
//! # }
//! ```
//!
//! ## Logging
//!
//! Collex uses structured logging with the `tracing` crate. With
//! `api.debug` enabled every request and response is logged in full,
//! including the `X-Api-Key` header.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
