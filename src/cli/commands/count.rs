//! Count command implementation
//!
//! Reads text from a file or stdin, runs the chosen execution strategy,
//! renders the word-count report, and optionally persists it.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::cli::Output;
use crate::config::{Mode, TallyConfig};
use crate::engine::{self, ProcessingResult};
use crate::report;

#[derive(Args)]
pub struct CountArgs {
    /// Text file to process; reads stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Execution strategy (defaults from configuration)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Chunk-count hint for parallel mode (must be >= 1)
    #[arg(long)]
    pub chunks: Option<usize>,

    /// Write the rendered report to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Show statistics after counting
    #[arg(long)]
    pub stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}

pub async fn execute(args: CountArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TallyConfig::load(config_path)?;

    let mode = args.mode.unwrap_or(config.default_mode);
    let chunk_count = match mode {
        // The sequential strategy always runs a single fixed chunk.
        Mode::Sequential => {
            if args.chunks.is_some() {
                output.warning("--chunks is ignored in sequential mode (always 1 chunk)");
            }
            1
        }
        Mode::Parallel => args.chunks.unwrap_or(config.default_chunks),
    };

    let text = read_input(args.file.as_deref())?;
    output.verbose(&format!(
        "{} mode, {} chunk hint, {} bytes of input",
        mode,
        chunk_count,
        text.len()
    ));

    let result = match mode {
        Mode::Sequential => engine::run_sequential(&text, chunk_count)?,
        Mode::Parallel => engine::run_parallel(&text, chunk_count)?,
    };

    let rendered = match args.format {
        ReportFormat::Text => report::render_text(&result),
        ReportFormat::Json => report::render_json(&result)?,
    };
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    if let Some(path) = &args.output {
        report::save_report(path, &rendered)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        output.success(&format!("Results saved to {}", path.display()));
    }

    if args.stats {
        print_stats(&result, mode, output);
    }

    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => {
            if !path.is_file() {
                bail!("Input file not found: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

fn print_stats(result: &ProcessingResult, mode: Mode, output: &Output) {
    output.header("Count Statistics");
    output.summary_stats("Mode:", &mode.to_string());
    output.summary_stats("Chunks processed:", &result.stats.chunks_processed.to_string());
    output.summary_stats("Workers used:", &result.stats.workers_used.to_string());
    output.summary_stats("Distinct words:", &result.stats.distinct_words.to_string());
    output.summary_stats("Total words:", &result.stats.total_words.to_string());
    output.summary_stats("Count time:", &format!("{}ms", result.stats.duration_ms));
}
