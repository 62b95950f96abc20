//! Converter backed by an external executable
//!
//! Runs a `postman-to-openapi` style CLI:
//!
//! ```text
//! <bin> <input> -f <output> -o <options.json>
//! ```
//!
//! where the options file holds the serialized [`ConvertOptions`].

use super::transient::TransientFile;
use super::traits::{ConvertOptions, Converter};
use crate::domain::{ExportError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Converter that shells out to an external binary
pub struct CommandConverter {
    binary_path: PathBuf,
}

impl CommandConverter {
    /// Create a converter with an explicit binary path
    pub fn new(binary_path: PathBuf) -> Self {
        Self { binary_path }
    }

    /// Resolve `command` (a path or a name on PATH) with the `which` crate
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Configuration`] if the executable cannot be found.
    pub fn from_command(command: &str) -> Result<Self> {
        which::which(command).map(Self::new).map_err(|e| {
            ExportError::Configuration(format!("Converter executable '{command}' not found: {e}"))
        })
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }
}

#[async_trait]
impl Converter for CommandConverter {
    async fn convert(&self, input: &Path, output: &Path, options: &ConvertOptions) -> Result<()> {
        let options_file = TransientFile::new(output.with_extension("options.json"));
        let options_json = serde_json::to_vec(options)?;
        tokio::fs::write(options_file.path(), options_json).await?;

        tracing::debug!(
            binary = %self.binary_path.display(),
            input = %input.display(),
            output = %output.display(),
            default_tag = %options.default_tag,
            "Running converter"
        );

        let result = Command::new(&self.binary_path)
            .arg(input)
            .arg("-f")
            .arg(output)
            .arg("-o")
            .arg(options_file.path())
            .output()
            .await
            .map_err(|e| {
                ExportError::Converter(format!(
                    "Failed to execute {}: {e}",
                    self.binary_path.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Converter(format!(
                "{} exited with {}: {}",
                self.binary_path.display(),
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "command"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_missing_binary() {
        let result = CommandConverter::from_command("nonexistent-openapi-converter-xyz");
        assert!(matches!(result, Err(ExportError::Configuration(_))));
    }

    #[cfg(unix)]
    fn write_script(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-converter.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_binary_with_options_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // Emit the options file as the converted document.
        let script = write_script(dir.path(), r#"cp "$5" "$3""#);
        let converter = CommandConverter::new(script);

        let input = dir.path().join("collection.json");
        let output = dir.path().join("openapi.json");
        std::fs::write(&input, "{}").unwrap();

        converter
            .convert(&input, &output, &ConvertOptions::json("User API"))
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["defaultTag"], "User API");
        assert_eq!(written["outputFormat"], "json");
        assert!(!output.with_extension("options.json").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_converter_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = write_script(dir.path(), "echo 'invalid collection' >&2\nexit 3");
        let converter = CommandConverter::new(script);

        let input = dir.path().join("collection.json");
        let output = dir.path().join("openapi.json");
        std::fs::write(&input, "{}").unwrap();

        let err = converter
            .convert(&input, &output, &ConvertOptions::json("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Converter(_)));
        assert!(err.to_string().contains("invalid collection"));
        assert!(!output.with_extension("options.json").exists());
    }
}
