//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CollexConfig;
use super::secret::secret_string_opt;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use secrecy::ExposeSecret;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CollexConfig
/// 4. Applies environment variable overrides (COLLEX_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a [`ExportError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use collex::config::loader::load_config;
///
/// let config = load_config("collex.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CollexConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CollexConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads the configuration file if it exists, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases, so the CLI can
/// run with nothing but `POSTMAN_API_KEY` set.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<CollexConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = CollexConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut CollexConfig) -> Result<()> {
    apply_env_overrides(config);

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Every unset variable is reported at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using COLLEX_* prefix
///
/// Variables follow the pattern `COLLEX_<SECTION>_<KEY>`, e.g.
/// `COLLEX_API_BASE_URL`. `POSTMAN_API_KEY` fills the API key only when
/// neither the file nor `COLLEX_API_KEY` provide one.
fn apply_env_overrides(config: &mut CollexConfig) {
    if let Ok(val) = std::env::var("COLLEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("COLLEX_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Some(key) = secret_string_opt(std::env::var("COLLEX_API_KEY").ok()) {
        config.api.api_key = Some(key);
    }
    let key_missing = config
        .api
        .api_key
        .as_ref()
        .map_or(true, |k| k.expose_secret().is_blank());
    if key_missing {
        config.api.api_key = secret_string_opt(std::env::var("POSTMAN_API_KEY").ok());
    }
    if let Ok(val) = std::env::var("COLLEX_API_DEBUG") {
        config.api.debug = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("COLLEX_API_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.api.timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("COLLEX_CONVERTER_COMMAND") {
        config.converter.command = val;
    }
    if let Ok(val) = std::env::var("COLLEX_CONVERTER_WORK_DIR") {
        config.converter.work_dir = Some(PathBuf::from(val));
    }

    if let Ok(val) = std::env::var("COLLEX_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = PathBuf::from(val);
    }

    if let Ok(val) = std::env::var("COLLEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("COLLEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("COLLEX_LOADER_TEST_VAR", "test_value");
        let input = "api_key = \"${COLLEX_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"\n");
        std::env::remove_var("COLLEX_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("COLLEX_LOADER_MISSING_VAR");
        let input = "api_key = \"${COLLEX_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("COLLEX_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# api_key = \"${COLLEX_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${COLLEX_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-collex.toml");
        assert!(matches!(result, Err(ExportError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[api]
base_url = "https://api.example.com"
api_key = "PMAK-test"

[converter]
command = "/usr/local/bin/p2o"

[export]
output_dir = "out"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.converter.command, "/usr/local/bin/p2o");
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbase_url = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
