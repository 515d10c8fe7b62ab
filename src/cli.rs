//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Batchlabel - batch integer classifier and text resource aggregator
///
/// Classifies the fixed range 1..=100 into foo/bar/foobar/number labels
/// (one per line on stdout) and can aggregate the seven fixed text
/// resources in a directory. Markdown/JSON run reports.
///
/// Examples:
///   batchlabel
///   batchlabel --report run_report.md
///   batchlabel --aggregate --dir ./data
///   batchlabel --aggregate --skip-classify
///   batchlabel --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Run the resource aggregator after the classifier
    ///
    /// Opens file_1.txt through file_7.txt under --dir in one scope and
    /// reads the first one. Fails with exit code 1 if any is missing.
    #[arg(short, long)]
    pub aggregate: bool,

    /// Skip the classifier and run only the aggregator
    #[arg(long, requires = "aggregate")]
    pub skip_classify: bool,

    /// Directory containing the seven resource files
    ///
    /// Defaults to the current working directory (or the config file value).
    #[arg(short, long, value_name = "DIR", env = "BATCHLABEL_DIR")]
    pub dir: Option<PathBuf>,

    /// Write a run report to this file
    ///
    /// The report never goes to stdout; stdout carries only the label lines.
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Report format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .batchlabel.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .batchlabel.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
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

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate resource directory if provided
        if let Some(ref dir) = self.dir {
            if !dir.exists() {
                return Err(format!("Resource directory does not exist: {}", dir.display()));
            }
            if !dir.is_dir() {
                return Err(format!("Resource path is not a directory: {}", dir.display()));
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            aggregate: false,
            skip_classify: false,
            dir: None,
            report: None,
            format: ReportFormat::Markdown,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_ok_by_default() {
        assert!(make_args().validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_dir() {
        let mut args = make_args();
        args.dir = Some(PathBuf::from("/definitely/not/a/real/dir"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
