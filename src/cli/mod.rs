//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Collex using clap.

pub mod commands;

use crate::config::CollexConfig;
use clap::{Parser, Subcommand};

/// Collex - export API collections as OpenAPI documents
#[derive(Parser, Debug)]
#[command(name = "collex")]
#[command(version, about, long_about = None)]
#[command(author = "Collex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "collex.toml", env = "COLLEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COLLEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log API requests and responses in full (the API key is not redacted)
    #[arg(long)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level to initialize logging with
    ///
    /// `--debug` wins, then `--log-level`, then the configuration file.
    pub fn effective_log_level<'a>(&'a self, config: &'a CollexConfig) -> &'a str {
        if self.debug {
            "debug"
        } else {
            self.log_level
                .as_deref()
                .unwrap_or(config.application.log_level.as_str())
        }
    }

    /// Apply global flags to the loaded configuration
    pub fn apply_overrides(&self, config: &mut CollexConfig) {
        if self.debug {
            config.api.debug = true;
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the collections of a workspace into OpenAPI documents
    Export(commands::export::ExportArgs),

    /// List the workspaces visible to the API key
    Workspaces(commands::workspaces::WorkspacesArgs),

    /// List the collections of a workspace
    Collections(commands::collections::CollectionsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["collex", "export", "--workspace", "workspace-ws1"]);
        assert_eq!(cli.config, "collex.toml");
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.workspace.as_deref(), Some("workspace-ws1"));
                assert!(!args.dry_run);
            }
            other => panic!("Expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_filters() {
        let cli = Cli::parse_from([
            "collex",
            "export",
            "-w",
            "ws1",
            "--ids",
            "col1,col2",
            "--names",
            "user",
            "--output",
            "out",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Export(args) => {
                let options = args.options();
                assert_eq!(options.ids, vec!["col1", "col2"]);
                assert_eq!(options.names, vec!["user"]);
                assert_eq!(args.output, Some(std::path::PathBuf::from("out")));
                assert!(args.dry_run);
            }
            other => panic!("Expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["collex", "--config", "custom.toml", "workspaces"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Workspaces(_)));
    }

    #[test]
    fn test_cli_parse_collections_requires_workspace() {
        assert!(Cli::try_parse_from(["collex", "collections"]).is_err());

        let cli = Cli::parse_from(["collex", "collections", "--workspace", "ws1"]);
        assert!(matches!(cli.command, Commands::Collections(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["collex", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_effective_log_level() {
        let mut config = CollexConfig::default();
        config.application.log_level = "warn".to_string();

        let cli = Cli::parse_from(["collex", "workspaces"]);
        assert_eq!(cli.effective_log_level(&config), "warn");

        let cli = Cli::parse_from(["collex", "--log-level", "trace", "workspaces"]);
        assert_eq!(cli.effective_log_level(&config), "trace");

        let cli = Cli::parse_from(["collex", "--log-level", "trace", "--debug", "workspaces"]);
        assert_eq!(cli.effective_log_level(&config), "debug");
    }

    #[test]
    fn test_debug_flag_enables_api_debug() {
        let mut config = CollexConfig::default();
        let cli = Cli::parse_from(["collex", "--debug", "workspaces"]);
        cli.apply_overrides(&mut config);
        assert!(config.api.debug);
    }
}
