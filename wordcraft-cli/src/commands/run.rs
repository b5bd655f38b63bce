//! Arguments and driver shared by the editing commands

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, Source};
use crate::output::{create_formatter, BoxedWriter, Document, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wordcraft_api::{ApiError, Config, EditPlan, Input, TextProcessor};
use wordcraft_core::Edit;

/// Input, output and processing options
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input files or patterns (supports glob); standard input when absent
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Editing strategy: pattern, sequence or buffer [default: sequence]
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Edit the input exactly as read, without trimming
    #[arg(long)]
    pub no_trim: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the configuration file with the flags
#[derive(Debug)]
struct Settings {
    processing: Config,
    format: OutputFormat,
    pretty_json: bool,
}

impl RunArgs {
    /// Validate `plan`, then edit every input and write the results
    pub fn run(&self, plan: &EditPlan) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting text editing");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let edits = plan
            .to_edits()
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        let processor = TextProcessor::with_config(settings.processing);
        let sources = resolve_sources(&self.input)?;
        log::info!(
            "Editing {} input(s) with {} edit(s) using {}",
            sources.len(),
            edits.len(),
            processor.strategy()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let process = |source: &Source| -> Result<Document> {
            let document = process_source(&processor, &edits, source)?;
            progress.file_completed(&document.source);
            Ok(document)
        };
        // Every input must succeed before anything is written
        let documents: Result<Vec<Document>> = if self.parallel {
            sources.par_iter().map(process).collect()
        } else {
            sources.iter().map(process).collect()
        };
        progress.finish();
        let documents = documents?;

        let writer = self.writer()?;
        let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);
        for document in &documents {
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        let file = CliConfig::load_or_default(self.config.as_deref())?;

        let strategy = self.strategy.clone().unwrap_or(file.processing.strategy);
        let processing = Config::builder()
            .strategy_name(strategy)
            .trim_input(file.processing.trim_input && !self.no_trim)
            .build()
            .map_err(|e| match e {
                ApiError::Config(msg) => CliError::ConfigError(msg),
                other => CliError::ConfigError(other.to_string()),
            })?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&file.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    file.output.default_format
                ))
            })?,
        };

        Ok(Settings {
            processing,
            format,
            pretty_json: file.output.pretty_json,
        })
    }

    fn writer(&self) -> Result<BoxedWriter> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }
}

fn process_source(
    processor: &TextProcessor,
    edits: &[Edit],
    source: &Source,
) -> Result<Document> {
    let name = source.name();
    log::debug!("Processing {name}");

    let text = source.read()?;
    let output = processor
        .process_edits(Input::Text(text), edits)
        .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;

    Ok(Document {
        source: name,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};
    use wordcraft_api::EditRequest;
    use wordcraft_core::Strategy;

    fn args() -> RunArgs {
        RunArgs {
            input: Vec::new(),
            output: None,
            format: None,
            strategy: None,
            parallel: false,
            no_trim: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = args().settings().unwrap();
        assert_eq!(settings.processing.strategy, Strategy::Sequence);
        assert!(settings.processing.trim_input);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.pretty_json);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[processing]\nstrategy = \"buffer\"\n\n[output]\ndefault_format = \"markdown\""
        )
        .unwrap();

        let mut run = args();
        run.config = Some(file.path().to_path_buf());
        let settings = run.settings().unwrap();
        assert_eq!(settings.processing.strategy, Strategy::Buffer);
        assert_eq!(settings.format, OutputFormat::Markdown);

        run.strategy = Some("regex".to_string());
        run.format = Some(OutputFormat::Json);
        run.no_trim = true;
        let settings = run.settings().unwrap();
        assert_eq!(settings.processing.strategy, Strategy::Pattern);
        assert!(!settings.processing.trim_input);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_strategy() {
        let mut run = args();
        run.strategy = Some("quantum".to_string());
        let err = run.settings().unwrap_err();
        assert!(err.to_string().contains("quantum"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        std::fs::write(&input, "  a(1)b  \n").unwrap();

        let mut run = args();
        run.input = vec![input.display().to_string()];
        run.output = Some(output.clone());
        let plan = EditPlan {
            edits: vec![EditRequest::StripNonAlphabetic],
        };
        run.run(&plan).unwrap();

        assert_eq!(std::fs::read_to_string(output).unwrap(), "a b\n");
    }

    #[test]
    fn test_failed_input_leaves_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        let bad = temp_dir.path().join("bad.txt");
        let output = temp_dir.path().join("out.txt");
        std::fs::write(&good, "a(1)b").unwrap();
        std::fs::write(&bad, [0xff, 0xfe]).unwrap();

        let mut run = args();
        run.input = vec![good.display().to_string(), bad.display().to_string()];
        run.output = Some(output.clone());
        let plan = EditPlan {
            edits: vec![EditRequest::StripNonAlphabetic],
        };

        assert!(run.run(&plan).is_err());
        assert!(!output.exists());
    }
}
