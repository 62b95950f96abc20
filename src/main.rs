// Collex - API collection to OpenAPI exporter
// Copyright (c) 2025 Collex Contributors
// Licensed under the MIT License

use collex::cli::{Cli, Commands};
use collex::config::{load_config_or_default, CollexConfig};
use collex::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // validate-config reports load errors itself
    let mut config = match load_config_or_default(&cli.config) {
        Ok(config) => config,
        Err(_) if matches!(cli.command, Commands::ValidateConfig(_)) => CollexConfig::default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    };
    cli.apply_overrides(&mut config);

    let guard = match init_logging(cli.effective_log_level(&config), &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config,
        "Collex - API collection to OpenAPI exporter"
    );

    let exit_code = match execute_command(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Flush the file appender before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &CollexConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(config).await,
        Commands::Workspaces(args) => args.execute(config).await,
        Commands::Collections(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
    }
}
