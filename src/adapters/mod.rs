//! External system integrations for Collex.
//!
//! - [`api`] - Collection API client (workspaces, collections)
//! - [`converter`] - Document converter abstraction and the external-command implementation
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies. The converter sits behind a trait
//! so the export pipeline can be tested with a fake; the API client is
//! tested against a local HTTP mock server.

pub mod api;
pub mod converter;
