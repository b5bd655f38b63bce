//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use std::path::PathBuf;
use wordcraft_api::Input;

/// Where one document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input, read line by line
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Source {
    /// Name shown in formatted output
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole document
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => Input::Console
                .read_text()
                .context("Failed to read standard input"),
            Source::File(path) => FileReader::read_text(path),
        }
    }
}

/// Resolve patterns to sources; no pattern means standard input
pub fn resolve_sources(patterns: &[String]) -> Result<Vec<Source>> {
    if patterns.is_empty() {
        return Ok(vec![Source::Stdin]);
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(Source::File)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_patterns_means_stdin() {
        assert_eq!(resolve_sources(&[]).unwrap(), vec![Source::Stdin]);
        assert_eq!(Source::Stdin.name(), "<stdin>");
    }

    #[test]
    fn test_file_source_name() {
        let source = Source::File(PathBuf::from("texts/sample.txt"));
        assert_eq!(source.name(), "texts/sample.txt");
    }
}
