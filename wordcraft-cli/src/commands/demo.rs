//! Demo command: the sample edits through every strategy

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use wordcraft_api::{trim_edges, Input, TextProcessor};
use wordcraft_core::predicate::{length_equals, starts_with_consonant, WordPredicate};
use wordcraft_core::{Edit, Strategy};

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Text file to edit (default: read standard input)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The five sample edits, titled
fn demonstrations() -> Vec<(&'static str, Edit)> {
    vec![
        (
            "Replace the letter at position 2 of every word with '_'",
            Edit::ReplaceLetterByPosition {
                position: 2,
                replacement: '_',
            },
        ),
        (
            "Replace 'd' after 'r' with 'k'",
            Edit::ReplaceLetterAfter {
                before: 'r',
                target: 'd',
                replacement: 'k',
            },
        ),
        (
            "Replace words of length 3 with \"replacement\"",
            Edit::replace_words(length_equals(3), "replacement"),
        ),
        (
            "Remove non-alphabetic characters except spaces",
            Edit::StripNonAlphabetic,
        ),
        (
            "Remove words of length 4 starting with a consonant",
            Edit::replace_words(length_equals(4).and(starts_with_consonant()), ""),
        ),
    ]
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let input = match &self.input {
            Some(path) => Input::from_file(path.clone()),
            None => Input::Console,
        };
        let text = input.read_text().context("Failed to read demo text")?;

        write_demo(&mut io::stdout().lock(), trim_edges(&text))
    }
}

fn write_demo<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    writeln!(writer, "Text: {text}")?;

    for (title, edit) in demonstrations() {
        writeln!(writer)?;
        writeln!(writer, "{title}")?;
        for strategy in Strategy::ALL {
            let output = TextProcessor::with_strategy(strategy)
                .process_text(text, &edit)
                .with_context(|| format!("{} failed with {strategy}", edit.name()))?;
            let label = format!("{strategy}:");
            writeln!(writer, "  {label:<10}{}", output.text)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "First(1) word, second(2) word, third(3) word - six(6) words!";

    #[test]
    fn test_demo_output() {
        let mut buffer = Vec::new();
        write_demo(&mut buffer, TEXT).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let expected = [
            "Fi_st(1) wo_d, se_ond(2) wo_d, th_rd(3) wo_d - si_(6) wo_ds!",
            "First(1) work, second(2) work, thirk(3) work - six(6) works!",
            "First(1) word, second(2) word, third(3) word - replacement(6) words!",
            "First word second word third word  six words",
            "First(1) , second(2) , third(3)  - six(6) words!",
        ];
        for line in expected {
            for strategy in Strategy::ALL {
                let labelled = format!("  {:<10}{line}", format!("{strategy}:"));
                assert!(output.contains(&labelled), "missing {labelled:?}");
            }
        }
    }

    #[test]
    fn test_demo_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  a(1)b  ").unwrap();

        let args = DemoArgs {
            input: Some(file.path().to_path_buf()),
            verbose: 0,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_demo_missing_file() {
        let args = DemoArgs {
            input: Some(PathBuf::from("/nonexistent/demo.txt")),
            verbose: 0,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to read demo text"));
    }
}
