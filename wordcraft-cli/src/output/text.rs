//! Plain text output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the edited text of each input
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        let text = &document.output.text;
        if text.ends_with('\n') {
            write!(self.writer, "{text}")?;
        } else {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
