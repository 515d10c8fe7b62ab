//! Batchlabel - batch integer classifier and text resource aggregator
//!
//! A CLI tool that classifies the fixed range 1..=100 into
//! foo/bar/foobar/number labels and aggregates a fixed set of seven
//! text resources. Markdown/JSON run reports.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (resource acquisition, config, report write)

mod aggregator;
mod classifier;
mod cli;
mod config;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, ReportFormat};
use config::Config;
use models::{ReportMetadata, RunReport};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Batchlabel v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the batch
    match run_batch(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .batchlabel.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".batchlabel.toml");

    if path.exists() {
        eprintln!(".batchlabel.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .batchlabel.toml")?;

    eprintln!("Created .batchlabel.toml with default settings.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr: stdout is reserved for the label lines.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the classifier and/or the aggregator. Returns the exit code.
fn run_batch(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: classify, emitting the labels to stdout
    let labels = if args.skip_classify {
        Vec::new()
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let labels = classifier::emit(&mut out).context("Failed to write labels to stdout")?;
        out.flush().ok();
        labels
    };

    // Step 2: aggregate the resource set if requested
    let resources_aggregated = if args.aggregate {
        let dir = Path::new(&config.resources.dir);
        info!("Aggregating resources in {}", dir.display());

        // The content is read into memory and dropped; nothing downstream
        // consumes it.
        let content = aggregator::aggregate(dir)
            .with_context(|| format!("Resource aggregation failed in {}", dir.display()))?;
        debug!("Primary resource content: {} bytes", content.len());

        Some(aggregator::RESOURCE_NAMES.len())
    } else {
        None
    };

    // Step 3: write the run report if requested
    if let Some(ref report_path) = args.report {
        let metadata = ReportMetadata {
            range_start: classifier::RANGE_START,
            range_end: classifier::RANGE_END,
            run_date: Utc::now(),
            duration_seconds: start_time.elapsed().as_secs_f64(),
            resources_aggregated,
        };
        let run_report = RunReport::new(metadata, labels);

        match args.format {
            ReportFormat::Markdown => {
                report::write_report(&run_report, report_path, config.report.include_labels)
            }
            ReportFormat::Json => report::write_json_report(&run_report, report_path),
        }
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

        info!("Report saved to {}", report_path.display());
    }

    debug!("Done in {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(0)
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
            info!("Loaded default config from .batchlabel.toml");
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
