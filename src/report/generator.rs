//! Markdown and JSON run report generation.

use crate::models::{LabelSummary, ReportMetadata, RunReport};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Generate a complete Markdown report.
///
/// `include_labels` controls whether the full 100-line label listing is
/// appended after the summary.
pub fn generate_markdown_report(report: &RunReport, include_labels: bool) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Batchlabel Run Report\n\n");

    // Metadata section
    output.push_str(&generate_metadata_section(&report.metadata));

    // Summary section
    output.push_str(&generate_summary_section(&report.summary));

    // Full label listing
    if include_labels {
        output.push_str(&generate_labels_section(report));
    }

    // Footer
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Range:** {}..={}\n",
        metadata.range_start, metadata.range_end
    ));
    section.push_str(&format!(
        "- **Run Date:** {}\n",
        metadata.run_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Duration:** {:.3}s\n",
        metadata.duration_seconds
    ));
    if let Some(count) = metadata.resources_aggregated {
        section.push_str(&format!("- **Resources Aggregated:** {}\n", count));
    }
    section.push('\n');

    section
}

/// Generate the summary section.
fn generate_summary_section(summary: &LabelSummary) -> String {
    let mut section = String::new();

    section.push_str("## Label Summary\n\n");
    section.push_str("| foo | bar | foobar | number | **Total** |\n");
    section.push_str("|:---:|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} | {} | {} | **{}** |\n\n",
        summary.foo, summary.bar, summary.foobar, summary.number, summary.total
    ));

    section
}

/// Generate the full label listing section.
fn generate_labels_section(report: &RunReport) -> String {
    let mut section = String::new();

    section.push_str("## Labels\n\n```\n");
    for label in &report.labels {
        section.push_str(&label.to_string());
        section.push('\n');
    }
    section.push_str("```\n\n");

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by batchlabel*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write a Markdown report to a file.
pub fn write_report(report: &RunReport, path: &Path, include_labels: bool) -> Result<()> {
    let content = generate_markdown_report(report, include_labels);

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Write a JSON report to a file.
pub fn write_json_report(report: &RunReport, path: &Path) -> Result<()> {
    let content = generate_json_report(report)?;

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier;
    use crate::models::Label;
    use chrono::Utc;

    fn create_test_report() -> RunReport {
        let metadata = ReportMetadata {
            range_start: 1,
            range_end: 100,
            run_date: Utc::now(),
            duration_seconds: 0.002,
            resources_aggregated: Some(7),
        };

        RunReport::new(metadata, classifier::classify_range().collect())
    }

    #[test]
    fn test_generate_markdown_report() {
        let report = create_test_report();
        let markdown = generate_markdown_report(&report, true);

        assert!(markdown.contains("# Batchlabel Run Report"));
        assert!(markdown.contains("## Metadata"));
        assert!(markdown.contains("## Label Summary"));
        assert!(markdown.contains("## Labels"));
        assert!(markdown.contains("- **Range:** 1..=100"));
        assert!(markdown.contains("- **Resources Aggregated:** 7"));
    }

    #[test]
    fn test_markdown_report_without_labels() {
        let report = create_test_report();
        let markdown = generate_markdown_report(&report, false);

        assert!(markdown.contains("## Label Summary"));
        assert!(!markdown.contains("## Labels"));
    }

    #[test]
    fn test_summary_counts_in_markdown() {
        let report = create_test_report();
        let section = generate_summary_section(&report.summary);

        // 1..=100: 27 foo, 14 bar, 6 foobar, 53 pass-through numbers.
        assert!(section.contains("| 27 | 14 | 6 | 53 | **100** |"));
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_test_report();
        let json = generate_json_report(&report).unwrap();

        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"labels\""));
        assert!(json.contains("\"range_start\""));

        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary, report.summary);
        assert_eq!(parsed.labels.len(), 100);
        assert_eq!(parsed.labels[14], Label::Foobar);
    }
}
