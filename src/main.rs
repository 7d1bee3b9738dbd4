//! Moodscan - lexicon-based sentiment analyzer for synthetic social posts
//!
//! A CLI tool that synthesizes fake social-media posts about a topic,
//! classifies each one with a lexicon-based polarity oracle, and emits
//! a report plus a CSV export.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (validation, config, I/O failure, etc.)
//!   2 - Dominant sentiment matched --fail-on

mod analysis;
mod cli;
mod config;
mod corpus;
mod export;
mod models;
mod report;

use analysis::{aggregate, first_examples, SentimentClassifier};
use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, FailOnLabel, OutputFormat};
use config::Config;
use corpus::CorpusProducer;
use indicatif::{ProgressBar, ProgressStyle};
use models::{Report, ReportMetadata, SentimentLabel, TextItem};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Initialize logging
    init_logging(&args);

    info!("Moodscan v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the analysis
    match run_analysis(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .moodscan.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".moodscan.toml");

    if path.exists() {
        anyhow::bail!(".moodscan.toml already exists. Remove it first or edit it manually.");
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .moodscan.toml")?;

    println!("✅ Created .moodscan.toml with default settings.");
    println!("   Edit it to customize topic, count, seed, and more.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete analysis workflow. Returns exit code (0 or 2).
fn run_analysis(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let topic = config.corpus.topic.clone();
    let count = config.corpus.count;
    let seed = config.corpus.seed;

    // Step 1: Generate the corpus
    println!("📝 Generating {} posts about '{}'...", count, topic);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut producer = CorpusProducer::new(rng);
    let items = producer.generate(&topic, count);
    info!("Generated {} posts", items.len());

    // Handle --dry-run: print the corpus and exit
    if args.dry_run {
        return handle_dry_run(&items);
    }

    // Step 2: Classify every post
    println!("🧠 Analyzing sentiment of all posts...");
    let classifier = SentimentClassifier::default();
    let progress = classification_progress(items.len(), args.quiet);
    let classified = classifier.classify_batch(items, |_| progress.inc(1));
    progress.finish_and_clear();

    // Step 3: Aggregate counts
    let counts = aggregate(&classified);
    let dominant = counts.dominant()?;
    debug!("Counts: {:?}", counts.entries());

    // Step 4: Build the report
    println!("📝 Generating report...");

    let duration = start_time.elapsed().as_secs_f64();
    let metadata = ReportMetadata {
        topic: topic.clone(),
        analysis_date: Utc::now(),
        total_posts: counts.total(),
        seed,
        duration_seconds: duration,
    };

    let report = Report {
        metadata,
        breakdown: counts.breakdown(),
        dominant,
        examples: if config.report.include_examples {
            first_examples(&classified)
        } else {
            Vec::new()
        },
        items: classified.clone(),
    };

    // Step 5: Render and save the report
    let output = match args.format {
        OutputFormat::Text => report::generate_text_report(&report, config.report.include_chart),
        OutputFormat::Markdown => {
            report::generate_markdown_report(&report, config.report.include_chart)
        }
        OutputFormat::Json => report::generate_json_report(&report)?,
    };

    std::fs::write(&args.output, &output)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    // Step 6: Export the CSV
    if config.export.csv {
        let dir = std::path::PathBuf::from(&config.export.dir);
        let csv_path = export::export_csv(&classified, &topic, &dir)?;
        println!("💾 Saved CSV to: {}", csv_path.display());
    }

    // Print summary
    println!("\n📊 Analysis Summary:");
    println!("   Posts analyzed: {}", counts.total());
    for row in &report.breakdown {
        println!(
            "   - {} {}: {} ({:.1}%)",
            row.label.emoji(),
            row.label,
            row.count,
            row.percent
        );
    }
    println!("   Most common sentiment: {} {}", dominant.emoji(), dominant);
    println!("   Duration: {:.1}s", duration);
    println!(
        "\n✅ Analysis complete! Report saved to: {}",
        args.output.display()
    );

    // Check --fail-on threshold
    if let Some(fail_label) = args.fail_on {
        if dominant == fail_on_to_label(fail_label) {
            eprintln!(
                "\n⛔ Dominant sentiment is {:?}. Failing (exit code 2).",
                fail_label
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Handle --dry-run: print the generated corpus, exit.
fn handle_dry_run(items: &[TextItem]) -> Result<i32> {
    println!("\n🔍 Dry run: corpus only (no classification)...\n");

    if items.is_empty() {
        println!("   No posts generated.");
    } else {
        for (index, item) in items.iter().enumerate() {
            println!("   {}. {}", index + 1, item.text);
        }
        println!("\n   Total: {} posts", items.len());
    }

    println!("\n✅ Dry run complete. Nothing was classified or written.");
    Ok(0)
}

/// Progress bar for the classification pass.
fn classification_progress(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} posts")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Convert FailOnLabel to SentimentLabel for comparison.
fn fail_on_to_label(label: FailOnLabel) -> SentimentLabel {
    match label {
        FailOnLabel::Positive => SentimentLabel::Positive,
        FailOnLabel::Negative => SentimentLabel::Negative,
        FailOnLabel::Neutral => SentimentLabel::Neutral,
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .moodscan.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
