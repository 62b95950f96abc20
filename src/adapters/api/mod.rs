//! Collection API adapter
//!
//! This module provides the authenticated HTTP client and the wire models
//! for the three endpoints Collex consumes:
//!
//! - `GET /workspaces`
//! - `GET /workspaces/{id}`
//! - `GET /collections/{uid}`

pub mod client;
pub mod models;

pub use client::{ApiClient, API_KEY_HEADER};
pub use models::{CollectionResponse, WorkspaceResponse, WorkspacesResponse};
