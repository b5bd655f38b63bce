//! Generate plan command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-plan command
#[derive(Debug, Args)]
pub struct GeneratePlanArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# wordcraft edit plan
#
# Edits run from top to bottom; each one receives the previous output.
# Parameters are required unless stated otherwise.

# Replace a character wherever it directly follows another one
[[edits]]
operation = "replace_letter_after"
before = "r"
target = "d"
replacement = "k"

# Replace (here: remove) every word matching a predicate.
# Predicate kinds:
#   { kind = "length_equals", length = 4 }
#   { kind = "starts_with_vowel" }
#   { kind = "starts_with_consonant" }
#   { kind = "starts_with", prefix = "w" }
#   { kind = "all", of = [ ...at least one predicate... ] }
[[edits]]
operation = "replace_words"
replacement = ""
predicate = { kind = "all", of = [{ kind = "length_equals", length = 4 }, { kind = "starts_with_consonant" }] }

# Replace the character at a zero-based offset inside every longer word
# [[edits]]
# operation = "replace_letter_by_position"
# position = 2
# replacement = "_"

# Remove runs of characters that are neither letters nor whitespace;
# a run between two letters becomes a single space
[[edits]]
operation = "strip_non_alphabetic"
"#;

impl GeneratePlanArgs {
    /// Execute the generate-plan command
    pub fn execute(&self) -> Result<()> {
        println!("Generating edit plan template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Edit plan template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the plan to describe your edits");
        println!("2. Apply it:");
        println!(
            "   wordcraft apply --plan {} -i input.txt",
            self.output.display()
        );

        Ok(())
    }
}
