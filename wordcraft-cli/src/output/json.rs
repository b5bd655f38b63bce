//! JSON output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source name
    pub source: String,
    /// Edited text
    pub text: String,
    /// Characters before editing
    pub input_chars: usize,
    /// Characters after editing
    pub output_chars: usize,
    /// Strategy that produced the text
    pub strategy: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        let metadata = &document.output.metadata;
        self.documents.push(DocumentData {
            source: document.source.clone(),
            text: document.output.text.clone(),
            input_chars: metadata.input_chars,
            output_chars: metadata.output_chars,
            strategy: metadata.strategy.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
