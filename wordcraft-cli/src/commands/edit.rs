//! Single-edit commands

use super::run::RunArgs;
use anyhow::Result;
use clap::{Args, Subcommand};
use wordcraft_api::{EditPlan, EditRequest, PredicateSpec};

/// Edit operations
#[derive(Debug, Subcommand)]
pub enum EditCommands {
    /// Replace the character at an in-word offset of every longer word
    Position(PositionArgs),

    /// Replace a character wherever it directly follows another
    After(AfterArgs),

    /// Replace words selected by a predicate
    Words(WordsArgs),

    /// Remove non-alphabetic runs, keeping letters apart with a space
    Strip(StripArgs),
}

/// Arguments for `edit position`
#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Zero-based offset inside each word
    #[arg(short = 'k', long, value_name = "K", allow_negative_numbers = true)]
    pub position: isize,

    /// Character written at that offset
    #[arg(short, long, value_name = "CHAR")]
    pub replacement: char,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for `edit after`
#[derive(Debug, Args)]
pub struct AfterArgs {
    /// Trigger character
    #[arg(short, long, value_name = "CHAR")]
    pub before: char,

    /// Character to replace
    #[arg(short, long, value_name = "CHAR")]
    pub target: char,

    /// Character written instead of the target
    #[arg(short, long, value_name = "CHAR")]
    pub replacement: char,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for `edit words`
///
/// Selector flags combine by conjunction; at least one is required.
#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Select words of exactly this many characters
    #[arg(long, value_name = "N")]
    pub length: Option<usize>,

    /// Select words starting with a vowel
    #[arg(long, conflicts_with = "consonant")]
    pub vowel: bool,

    /// Select words starting with a consonant
    #[arg(long)]
    pub consonant: bool,

    /// Select words starting with this exact character
    #[arg(long, value_name = "CHAR")]
    pub prefix: Option<char>,

    /// Text written in place of each selected word (may be empty)
    #[arg(short, long, value_name = "TEXT")]
    pub replacement: String,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for `edit strip`
#[derive(Debug, Args)]
pub struct StripArgs {
    #[command(flatten)]
    pub run: RunArgs,
}

impl WordsArgs {
    /// Conjunction of the selector flags, if any was given
    fn predicate(&self) -> Option<PredicateSpec> {
        let mut specs = Vec::new();
        if let Some(length) = self.length {
            specs.push(PredicateSpec::LengthEquals { length });
        }
        if self.vowel {
            specs.push(PredicateSpec::StartsWithVowel);
        }
        if self.consonant {
            specs.push(PredicateSpec::StartsWithConsonant);
        }
        if let Some(prefix) = self.prefix {
            specs.push(PredicateSpec::StartsWith { prefix });
        }
        PredicateSpec::all_of(specs)
    }
}

impl EditCommands {
    /// The edit described by the arguments
    pub fn request(&self) -> EditRequest {
        match self {
            EditCommands::Position(args) => EditRequest::ReplaceLetterByPosition {
                position: Some(args.position),
                replacement: Some(args.replacement),
            },
            EditCommands::After(args) => EditRequest::ReplaceLetterAfter {
                before: Some(args.before),
                target: Some(args.target),
                replacement: Some(args.replacement),
            },
            EditCommands::Words(args) => EditRequest::ReplaceWords {
                predicate: args.predicate(),
                replacement: Some(args.replacement.clone()),
            },
            EditCommands::Strip(_) => EditRequest::StripNonAlphabetic,
        }
    }

    fn run_args(&self) -> &RunArgs {
        match self {
            EditCommands::Position(args) => &args.run,
            EditCommands::After(args) => &args.run,
            EditCommands::Words(args) => &args.run,
            EditCommands::Strip(args) => &args.run,
        }
    }

    /// Execute the edit command
    pub fn execute(&self) -> Result<()> {
        let plan = EditPlan {
            edits: vec![self.request()],
        };
        self.run_args().run(&plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        operation: EditCommands,
    }

    fn parse(args: &[&str]) -> EditCommands {
        TestCli::try_parse_from(std::iter::once("edit").chain(args.iter().copied()))
            .unwrap()
            .operation
    }

    #[test]
    fn test_position_request() {
        let command = parse(&["position", "-k", "2", "-r", "_", "-i", "a.txt"]);
        assert_eq!(
            command.request(),
            EditRequest::ReplaceLetterByPosition {
                position: Some(2),
                replacement: Some('_'),
            }
        );
        assert_eq!(command.run_args().input, ["a.txt"]);
    }

    #[test]
    fn test_negative_position_reaches_validation() {
        let command = parse(&["position", "-k", "-1", "-r", "_"]);
        let err = command.request().to_edit().unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_words_selectors_combine() {
        let command = parse(&["words", "--length", "4", "--consonant", "-r", ""]);
        assert_eq!(
            command.request(),
            EditRequest::ReplaceWords {
                predicate: Some(PredicateSpec::All {
                    of: vec![
                        PredicateSpec::LengthEquals { length: 4 },
                        PredicateSpec::StartsWithConsonant,
                    ],
                }),
                replacement: Some(String::new()),
            }
        );
    }

    #[test]
    fn test_words_without_selector_has_no_predicate() {
        let command = parse(&["words", "-r", "x"]);
        let err = command.request().to_edit().unwrap_err();
        assert_eq!(err.to_string(), "predicate cannot be absent");
    }

    #[test]
    fn test_vowel_conflicts_with_consonant() {
        let args = ["edit", "words", "--vowel", "--consonant", "-r", "x"];
        assert!(TestCli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_after_and_strip_requests() {
        let command = parse(&["after", "-b", "r", "-t", "d", "-r", "k"]);
        assert_eq!(
            command.request(),
            EditRequest::ReplaceLetterAfter {
                before: Some('r'),
                target: Some('d'),
                replacement: Some('k'),
            }
        );
        assert_eq!(parse(&["strip", "-q"]).request(), EditRequest::StripNonAlphabetic);
    }
}
