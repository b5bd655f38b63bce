//! Public API for wordcraft text editing
//!
//! This crate wraps the core editors with input sources, configuration and
//! serializable edit requests.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod request;

use error::Result;
use std::path::Path;
use std::time::Instant;
use wordcraft_core::{Edit, Strategy, TextEditor};

// Re-export key types
pub use config::{trim_edges, Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output};
pub use error::ApiError;
pub use request::{EditJob, EditPlan, EditRequest, PredicateSpec};
pub use wordcraft_core::{EditError, ErrorKind};

/// Main entry point for text editing
pub struct TextProcessor {
    editor: Box<dyn TextEditor>,
    config: Config,
}

impl TextProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new processor using `strategy` and otherwise default settings
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::with_config(Config {
            strategy,
            ..Config::default()
        })
    }

    /// Create a new processor with custom configuration
    pub fn with_config(config: Config) -> Self {
        log::debug!(
            "creating processor: strategy={}, trim_input={}",
            config.strategy,
            config.trim_input
        );
        Self {
            editor: config.strategy.editor(),
            config,
        }
    }

    /// Read `input` and apply one edit
    pub fn process(&self, input: Input, edit: &Edit) -> Result<Output> {
        self.process_edits(input, std::slice::from_ref(edit))
    }

    /// Read `input` and apply `edits` in order
    ///
    /// All edits are validated before the input is read.
    pub fn process_edits(&self, input: Input, edits: &[Edit]) -> Result<Output> {
        for edit in edits {
            edit.validate()?;
        }
        self.apply_all(input, edits)
    }

    /// Apply one edit to `text` (convenience method)
    pub fn process_text(&self, text: &str, edit: &Edit) -> Result<Output> {
        self.process(Input::from_text(text), edit)
    }

    /// Read `input` and apply every edit of `plan` in order
    ///
    /// All edits are validated before the input is read.
    pub fn process_plan(&self, input: Input, plan: &EditPlan) -> Result<Output> {
        let edits = plan.to_edits()?;
        log::debug!("running plan with {} edit(s)", edits.len());
        self.apply_all(input, &edits)
    }

    /// Validate and run a self-contained job
    pub fn run_job(&self, job: EditJob) -> Result<Output> {
        let (text, edit) = job.into_parts()?;
        self.apply_all(Input::Text(text), std::slice::from_ref(&edit))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured strategy
    pub fn strategy(&self) -> Strategy {
        self.editor.strategy()
    }

    fn apply_all(&self, input: Input, edits: &[Edit]) -> Result<Output> {
        let start = Instant::now();

        let mut text = input.read_text()?;
        if self.config.trim_input {
            text = trim_edges(&text).to_string();
        }
        let input_chars = text.chars().count();

        for edit in edits {
            log::debug!("applying {} with {}", edit.name(), self.strategy());
            text = self.editor.apply(&text, edit)?;
        }

        let elapsed = start.elapsed();
        let metadata = Metadata {
            strategy: self.strategy().name().to_string(),
            input_chars,
            output_chars: text.chars().count(),
            edits_applied: edits.len(),
            processing_time_us: elapsed.as_micros() as u64,
        };

        Ok(Output { text, metadata })
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Apply one edit to `text` with default configuration
pub fn process_text(text: &str, edit: &Edit) -> Result<Output> {
    TextProcessor::new().process_text(text, edit)
}

/// Apply one edit to a file with default configuration
pub fn process_file<P: AsRef<Path>>(path: P, edit: &Edit) -> Result<Output> {
    TextProcessor::new().process(Input::from_file(path.as_ref().to_path_buf()), edit)
}

/// Apply a TOML plan file to `text` with default configuration
pub fn apply_plan_file<P: AsRef<Path>>(text: &str, plan: P) -> Result<Output> {
    let plan = EditPlan::from_file(plan)?;
    TextProcessor::new().process_plan(Input::from_text(text), &plan)
}
