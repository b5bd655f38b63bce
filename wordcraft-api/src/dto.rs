//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;

/// Input source for processing
#[derive(Serialize, Deserialize)]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Standard input, read line by line
    Console,
    /// Reader (not serializable)
    #[serde(skip)]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Console => f.write_str("Console"),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Console => read_lines(io::stdin().lock()),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Read every line of `reader`, terminating each with `\n`
///
/// `\r\n` endings are normalized; a final line without a terminator gains one.
pub fn read_lines<R: BufRead>(reader: R) -> Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line?);
        text.push('\n');
    }
    Ok(text)
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Strategy that executed the edits
    pub strategy: String,
    /// Characters in the text handed to the first edit
    pub input_chars: usize,
    /// Characters in the final text
    pub output_chars: usize,
    /// Number of edits applied
    pub edits_applied: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
}

/// Edited text with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Edited text
    pub text: String,
    /// Processing metadata
    pub metadata: Metadata,
}
