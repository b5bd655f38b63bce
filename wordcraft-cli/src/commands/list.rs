//! List command implementation

use super::ListCommands;
use anyhow::Result;
use std::io::{self, Write};
use wordcraft_core::Strategy;

/// Word predicates: plan kind, `edit words` flag, description
const PREDICATES: [(&str, &str, &str); 5] = [
    ("length_equals", "--length N", "word has exactly N characters"),
    ("starts_with_vowel", "--vowel", "first letter is a Latin or Cyrillic vowel"),
    (
        "starts_with_consonant",
        "--consonant",
        "first letter is a Latin or Cyrillic consonant",
    ),
    ("starts_with", "--prefix C", "word begins with exactly C"),
    ("all", "(combined flags)", "every listed predicate holds"),
];

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    write_listing(&mut io::stdout().lock(), subcommand)
}

fn write_listing<W: Write>(writer: &mut W, subcommand: ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Strategies => {
            writeln!(writer, "Available strategies:")?;
            for strategy in Strategy::ALL {
                let marker = if strategy == Strategy::default() {
                    " (default)"
                } else {
                    ""
                };
                writeln!(
                    writer,
                    "  {:<10}{}{}",
                    strategy.name(),
                    strategy.description(),
                    marker
                )?;
            }
        }
        ListCommands::Predicates => {
            writeln!(writer, "Available predicates:")?;
            for (kind, flag, description) in PREDICATES {
                writeln!(writer, "  {kind:<23}{flag:<18}{description}")?;
            }
        }
    }
    Ok(())
}
