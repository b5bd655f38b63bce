//! Serializable edit requests
//!
//! Requests arrive from JSON jobs or TOML plans with every parameter
//! optional. Conversion into a core [`Edit`] validates eagerly: a missing
//! parameter is reported as [`EditError::NullInput`], an out-of-range one as
//! [`EditError::InvalidArgument`].

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordcraft_core::predicate::{
    length_equals, starts_with, starts_with_consonant, starts_with_vowel, WordPredicate,
};
use wordcraft_core::{Edit, EditError};

/// Word selector as it appears in requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateSpec {
    /// Word length in characters equals `length`
    LengthEquals {
        /// Required length
        length: usize,
    },
    /// First character is a vowel
    StartsWithVowel,
    /// First character is a consonant
    StartsWithConsonant,
    /// First character is exactly `prefix`
    StartsWith {
        /// Required first character
        prefix: char,
    },
    /// Every nested predicate holds
    All {
        /// Conjuncts, at least one
        of: Vec<PredicateSpec>,
    },
}

impl PredicateSpec {
    /// Build the predicate
    pub fn build(&self) -> Result<Box<dyn WordPredicate>> {
        Ok(match self {
            PredicateSpec::LengthEquals { length } => length_equals(*length).boxed(),
            PredicateSpec::StartsWithVowel => starts_with_vowel().boxed(),
            PredicateSpec::StartsWithConsonant => starts_with_consonant().boxed(),
            PredicateSpec::StartsWith { prefix } => starts_with(*prefix).boxed(),
            PredicateSpec::All { of } => {
                let mut specs = of.iter();
                let first = specs.next().ok_or_else(|| {
                    ApiError::Config("an `all` predicate needs at least one member".to_string())
                })?;
                let mut predicate = first.build()?;
                for spec in specs {
                    predicate = predicate.and(spec.build()?).boxed();
                }
                predicate
            }
        })
    }

    /// Conjunction of `specs`, flattened when there is only one
    pub fn all_of(mut specs: Vec<PredicateSpec>) -> Option<PredicateSpec> {
        match specs.len() {
            0 => None,
            1 => specs.pop(),
            _ => Some(PredicateSpec::All { of: specs }),
        }
    }
}

/// One edit with optional parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum EditRequest {
    /// Replace the character at `position` inside every longer word
    ReplaceLetterByPosition {
        /// Zero-based in-word offset
        position: Option<isize>,
        /// Character written at that offset
        replacement: Option<char>,
    },
    /// Replace `target` wherever it directly follows `before`
    ReplaceLetterAfter {
        /// Trigger character
        before: Option<char>,
        /// Character to replace
        target: Option<char>,
        /// Character written instead
        replacement: Option<char>,
    },
    /// Replace every word selected by `predicate`
    ReplaceWords {
        /// Word selector
        predicate: Option<PredicateSpec>,
        /// Text written in place of each selected word
        replacement: Option<String>,
    },
    /// Remove non-alphabetic runs
    StripNonAlphabetic,
}

fn required<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| EditError::null_input(argument).into())
}

impl EditRequest {
    /// Operation name, as written in the `operation` tag
    pub fn name(&self) -> &'static str {
        match self {
            EditRequest::ReplaceLetterByPosition { .. } => "replace_letter_by_position",
            EditRequest::ReplaceLetterAfter { .. } => "replace_letter_after",
            EditRequest::ReplaceWords { .. } => "replace_words",
            EditRequest::StripNonAlphabetic => "strip_non_alphabetic",
        }
    }

    /// Validate the request and convert it into an [`Edit`]
    pub fn to_edit(&self) -> Result<Edit> {
        let edit = match self {
            EditRequest::ReplaceLetterByPosition {
                position,
                replacement,
            } => Edit::ReplaceLetterByPosition {
                position: required(*position, "position")?,
                replacement: required(*replacement, "replacement")?,
            },
            EditRequest::ReplaceLetterAfter {
                before,
                target,
                replacement,
            } => Edit::ReplaceLetterAfter {
                before: required(*before, "before")?,
                target: required(*target, "target")?,
                replacement: required(*replacement, "replacement")?,
            },
            EditRequest::ReplaceWords {
                predicate,
                replacement,
            } => {
                let predicate = required(predicate.as_ref(), "predicate")?.build()?;
                Edit::ReplaceWords {
                    predicate,
                    replacement: required(replacement.clone(), "replacement")?,
                }
            }
            EditRequest::StripNonAlphabetic => Edit::StripNonAlphabetic,
        };
        edit.validate()?;

        Ok(edit)
    }
}

/// Text plus one edit, as accepted from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditJob {
    /// Text to edit
    #[serde(default)]
    pub text: Option<String>,
    /// Edit to apply
    pub edit: EditRequest,
}

impl EditJob {
    /// Parse a job from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the job, text first
    pub fn into_parts(self) -> Result<(String, Edit)> {
        let text = required(self.text, "text")?;
        let edit = self.edit.to_edit()?;
        Ok((text, edit))
    }
}

/// Ordered list of edits, each consuming the previous output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPlan {
    /// Edits in application order
    #[serde(default)]
    pub edits: Vec<EditRequest>,
}

impl EditPlan {
    /// Parse a plan from TOML (`[[edits]]` tables)
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a plan from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validate every request before any of them runs
    pub fn to_edits(&self) -> Result<Vec<Edit>> {
        self.edits.iter().map(EditRequest::to_edit).collect()
    }

    /// Number of edits
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Whether the plan has no edits
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}
