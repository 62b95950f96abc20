//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Collex configuration file.

use crate::config::{load_config, CollexConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// The file is loaded strictly: a missing file is an error here even
    /// though other commands fall back to defaults.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(e.exit_code());
            }
        };

        println!("✅ Configuration is valid");
        println!();
        print_summary(&config);

        if config.api.api_key.is_none() {
            println!("⚠️  No API key configured; set COLLEX_API_KEY or POSTMAN_API_KEY");
        }

        match which::which(&config.converter.command) {
            Ok(path) => println!("✅ Converter found: {}", path.display()),
            Err(_) => println!(
                "⚠️  Converter '{}' not found; exports will fail until it is installed",
                config.converter.command
            ),
        }
        println!();

        Ok(0)
    }
}

fn print_summary(config: &CollexConfig) {
    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  API Base URL: {}", config.api.base_url);
    println!(
        "  API Key: {}",
        if config.api.api_key.is_some() {
            "set"
        } else {
            "not set"
        }
    );
    println!(
        "  Request Timeout: {}",
        match config.api.timeout_seconds {
            0 => "none".to_string(),
            secs => format!("{secs}s"),
        }
    );
    println!("  API Debug Logging: {}", config.api.debug);
    println!("  Converter: {}", config.converter.command);
    println!(
        "  Converter Work Dir: {}",
        config.converter.resolved_work_dir().display()
    );
    println!("  Output Dir: {}", config.export.output_dir.display());
    if config.logging.local_enabled {
        println!(
            "  File Logging: {} ({})",
            config.logging.local_path, config.logging.local_rotation
        );
    } else {
        println!("  File Logging: disabled");
    }
    println!();
}
