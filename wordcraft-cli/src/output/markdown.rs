//! Markdown output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    input_chars: usize,
    output_chars: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            input_chars: 0,
            output_chars: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        let metadata = &document.output.metadata;
        self.document_count += 1;
        self.input_chars += metadata.input_chars;
        self.output_chars += metadata.output_chars;

        writeln!(self.writer, "## {}", document.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", document.output.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total documents: {} ({} → {} characters)*",
            self.document_count, self.input_chars, self.output_chars
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::document;

    #[test]
    fn test_sections_and_footer() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_document(&document("one.txt", "a-b", "a b"))
            .unwrap();
        formatter
            .format_document(&document("two.txt", "c!", "c"))
            .unwrap();
        formatter.finish().unwrap();

        let markdown = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            markdown,
            "## one.txt\n\na b\n\n## two.txt\n\nc\n\n---\n*Total documents: 2 (5 → 4 characters)*\n"
        );
    }
}
