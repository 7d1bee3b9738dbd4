//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Moodscan - lexicon-based sentiment analyzer for synthetic social posts
///
/// Generates fake social-media posts about a topic, scores each one
/// with a sentiment lexicon, and produces a report plus a CSV export.
///
/// Examples:
///   moodscan --topic pizza --count 100
///   moodscan --topic "bubble tea" --seed 42 --format json -o report.json
///   moodscan --topic coffee --dry-run
///   moodscan --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Topic to generate posts about
    ///
    /// Interpolated verbatim into every post template.
    /// Can also be set via MOODSCAN_TOPIC env var or .moodscan.toml config.
    #[arg(short, long, default_value = "pizza", env = "MOODSCAN_TOPIC")]
    pub topic: String,

    /// Number of posts to generate
    #[arg(short = 'n', long, default_value = "100", value_name = "COUNT")]
    pub count: usize,

    /// RNG seed for a reproducible corpus
    ///
    /// Without a seed the corpus differs on every run.
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output file path for the report
    #[arg(
        short,
        long,
        default_value = "moodscan_report.md",
        value_name = "FILE"
    )]
    pub output: PathBuf,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Directory the CSV export is written to
    #[arg(long, value_name = "DIR")]
    pub csv_dir: Option<PathBuf>,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the bar chart in the report
    #[arg(long)]
    pub no_chart: bool,

    /// Fail if the dominant sentiment equals this label
    ///
    /// Useful for CI pipelines. Exit code 2 when triggered.
    /// Values: positive, negative, neutral
    #[arg(long, value_name = "LABEL")]
    pub fail_on: Option<FailOnLabel>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .moodscan.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: generate and print the corpus without classifying
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .moodscan.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Console-style text report
    Text,
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

/// Sentiment label for --fail-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FailOnLabel {
    Positive,
    Negative,
    Neutral,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.topic.trim().is_empty() {
            return Err("Topic must not be empty".to_string());
        }

        // An empty batch has no dominant sentiment, so a full run needs
        // at least one post. A dry run may print an empty corpus.
        if self.count == 0 && !self.dry_run {
            return Err("Count must be at least 1".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
