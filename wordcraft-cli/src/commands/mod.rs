//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod apply;
pub mod demo;
pub mod edit;
pub mod generate_plan;
pub mod list;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the five sample edits through every strategy
    Demo(demo::DemoArgs),

    /// Apply a single edit
    Edit {
        #[command(subcommand)]
        operation: edit::EditCommands,
    },

    /// Apply an edit plan (TOML)
    Apply(apply::ApplyArgs),

    /// Write a commented edit plan template
    GeneratePlan(generate_plan::GeneratePlanArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List editing strategies
    Strategies,

    /// List word predicates
    Predicates,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Demo(args) => args.execute(),
            Commands::Edit { operation } => operation.execute(),
            Commands::Apply(args) => args.execute(),
            Commands::GeneratePlan(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization in the same process is ignored.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
