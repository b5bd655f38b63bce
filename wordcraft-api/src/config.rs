//! High-level configuration API

use crate::error::{ApiError, Result};
use wordcraft_core::Strategy;

/// High-level configuration for text processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Strategy executing the edits
    pub strategy: Strategy,
    /// Trim leading and trailing whitespace and control characters before
    /// editing (see [`trim_edges`])
    pub trim_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            trim_input: false,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration that trims the input before editing
    pub fn trimmed() -> Self {
        Self {
            trim_input: true,
            ..Self::default()
        }
    }
}

/// Strip leading and trailing characters up to and including U+0020
///
/// Covers ASCII spaces and control characters only; Unicode spaces such as
/// U+00A0 are part of the text.
pub fn trim_edges(text: &str) -> &str {
    text.trim_matches(|ch: char| ch <= ' ')
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    strategy_name: Option<String>,
}

impl ConfigBuilder {
    /// Set the strategy by name (`pattern`, `sequence`, `buffer` or an alias)
    pub fn strategy_name(mut self, name: impl Into<String>) -> Self {
        self.strategy_name = Some(name.into());
        self
    }

    /// Set the strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self.strategy_name = None;
        self
    }

    /// Enable or disable input trimming
    pub fn trim_input(mut self, trim: bool) -> Self {
        self.config.trim_input = trim;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<Config> {
        if let Some(name) = self.strategy_name {
            self.config.strategy = name
                .parse()
                .map_err(|e: wordcraft_core::ParseStrategyError| ApiError::Config(e.to_string()))?;
        }

        Ok(self.config)
    }
}
