//! Output formatting module

use anyhow::Result;
use std::io::Write;
use wordcraft_api::Output;

/// One edited input together with where it came from
#[derive(Debug, Clone)]
pub struct Document {
    /// Source name (`<stdin>` or a file path)
    pub source: String,
    /// Edited text and metadata
    pub output: Output,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single edited document
    fn format_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Edited text only
    Text,
    /// JSON array with per-input statistics
    Json,
    /// Markdown section per input
    Markdown,
}

/// Writer target shared by the formatters
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Create the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: BoxedWriter,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Document;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use wordcraft_api::{Metadata, Output};

    pub fn document(source: &str, input: &str, text: &str) -> Document {
        Document {
            source: source.to_string(),
            output: Output {
                text: text.to_string(),
                metadata: Metadata {
                    strategy: "sequence".to_string(),
                    input_chars: input.chars().count(),
                    output_chars: text.chars().count(),
                    edits_applied: 1,
                    processing_time_us: 0,
                },
            },
        }
    }

    /// Cloneable in-memory writer
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{document, SharedBuffer};
    use super::*;

    #[test]
    fn test_create_formatter_for_each_format() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, Box::new(buffer.clone()), false);
            formatter
                .format_document(&document("a.txt", "a-b", "a b"))
                .unwrap();
            formatter.finish().unwrap();
            assert!(buffer.contents().contains("a b"), "{format:?}");
        }
    }
}
