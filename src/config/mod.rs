//! Configuration management for Collex.
//!
//! Collex reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `COLLEX_*` environment overrides
//! - Default values for every setting
//! - Per-section validation
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "https://api.getpostman.com"
//! api_key = "${POSTMAN_API_KEY}"
//! debug = false
//!
//! [converter]
//! command = "p2o"
//!
//! [export]
//! output_dir = "./openapi"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApiConfig, ApplicationConfig, CollexConfig, ConverterConfig, ExportConfig, LoggingConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
