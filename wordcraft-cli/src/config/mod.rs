//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default strategy name
    pub strategy: String,

    /// Trim leading and trailing whitespace before editing
    pub trim_input: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            strategy: "sequence".to_string(),
            trim_input: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.strategy, "sequence");
        assert!(config.processing.trim_input);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\nstrategy = \"buffer\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.processing.strategy, "buffer");
        assert!(config.processing.trim_input);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\ntrim_input = \"sometimes\"").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_serializes_round_trip() {
        let text = toml::to_string(&CliConfig::default()).unwrap();
        assert!(text.contains("[processing]"));
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }
}
