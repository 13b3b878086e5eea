//! Configuration file loading
//!
//! ```json
//! { "schema_dir": "./schemas", "pretty": false, "log_level": "warn" }
//! ```
//!
//! Only `schema_dir` is required.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::{CliError, CliResult};
use crate::observability::LOG_LEVELS;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding schema files (required)
    pub schema_dir: String,

    /// Indent the `inspect` response (optional, default false). Streaming
    /// commands always write one compact response per line.
    #[serde(default)]
    pub pretty: bool,

    /// Log level when RUST_LOG is unset (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> CliResult<()> {
        if self.schema_dir.trim().is_empty() {
            return Err(CliError::config_error("schema_dir must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Get schema directory as Path
    pub fn schema_path(&self) -> &Path {
        Path::new(&self.schema_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("aerojson.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"schema_dir": "./schemas"}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.schema_path(), Path::new("./schemas"));
        assert!(!config.pretty);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_schema_dir_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"pretty": true}"#);

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "AERO_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_empty_schema_dir_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"schema_dir": "  "}"#);

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"schema_dir": "s", "log_level": "loud"}"#);

        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("loud"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }
}
