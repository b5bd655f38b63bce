//! wordcraft command-line entry point

use clap::Parser;
use wordcraft_cli::commands::Commands;
use wordcraft_cli::CliResult;

/// Position-aware word editing
#[derive(Debug, Parser)]
#[command(name = "wordcraft", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
