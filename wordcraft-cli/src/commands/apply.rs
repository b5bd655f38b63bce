//! Apply command implementation

use super::run::RunArgs;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use wordcraft_api::EditPlan;

/// Arguments for the apply command
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Edit plan (TOML with `[[edits]]` tables)
    #[arg(long, value_name = "PLAN", required = true)]
    pub plan: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,
}

impl ApplyArgs {
    /// Execute the apply command
    pub fn execute(&self) -> Result<()> {
        let plan = self.load_plan()?;
        self.run.run(&plan)
    }

    fn load_plan(&self) -> Result<EditPlan> {
        let source = fs::read_to_string(&self.plan)
            .with_context(|| format!("Failed to read plan: {}", self.plan.display()))?;
        let plan = EditPlan::from_toml_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", self.plan.display())))?;
        if plan.is_empty() {
            log::warn!("Plan {} has no edits", self.plan.display());
        }
        Ok(plan)
    }
}
