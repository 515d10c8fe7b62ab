//! Data models for the batch classifier.
//!
//! This module contains the core data structures used throughout
//! the application for representing labels, run summaries, and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome for a single integer.
///
/// Exactly one label exists per input value, determined by divisibility
/// by 3 and/or 5. Multiples of 15 are always `Foobar`, never `Foo` or `Bar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "label", content = "value")]
pub enum Label {
    /// Divisible by 3 but not by 5.
    Foo,
    /// Divisible by 5 but not by 3.
    Bar,
    /// Divisible by both 3 and 5.
    Foobar,
    /// Divisible by neither; carries the source integer.
    Number(u32),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Foo => write!(f, "foo"),
            Label::Bar => write!(f, "bar"),
            Label::Foobar => write!(f, "foobar"),
            Label::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Label {
    /// Returns the label class name without the carried value.
    #[allow(dead_code)] // Utility for report grouping
    pub fn class_name(&self) -> &'static str {
        match self {
            Label::Foo => "foo",
            Label::Bar => "bar",
            Label::Foobar => "foobar",
            Label::Number(_) => "number",
        }
    }
}

/// Summary of label counts over a classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSummary {
    /// Total number of labels emitted.
    pub total: usize,
    /// Number of `foo` labels.
    pub foo: usize,
    /// Number of `bar` labels.
    pub bar: usize,
    /// Number of `foobar` labels.
    pub foobar: usize,
    /// Number of pass-through numeric labels.
    pub number: usize,
}

impl LabelSummary {
    /// Creates a summary from a list of labels.
    pub fn from_labels(labels: &[Label]) -> Self {
        let mut summary = Self {
            total: labels.len(),
            ..Self::default()
        };

        for label in labels {
            match label {
                Label::Foo => summary.foo += 1,
                Label::Bar => summary.bar += 1,
                Label::Foobar => summary.foobar += 1,
                Label::Number(_) => summary.number += 1,
            }
        }

        summary
    }
}

/// Metadata about a classification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// First value of the classified range (inclusive).
    pub range_start: u32,
    /// Last value of the classified range (inclusive).
    pub range_end: u32,
    /// Date and time of the run.
    pub run_date: DateTime<Utc>,
    /// Duration of the run in seconds.
    pub duration_seconds: f64,
    /// Number of resources aggregated, if the aggregator ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_aggregated: Option<usize>,
}

/// The complete run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Metadata about the run.
    pub metadata: ReportMetadata,
    /// Label counts.
    pub summary: LabelSummary,
    /// The full label sequence, in emission order.
    pub labels: Vec<Label>,
}

impl RunReport {
    /// Creates a report from the emitted label sequence.
    pub fn new(metadata: ReportMetadata, labels: Vec<Label>) -> Self {
        let summary = LabelSummary::from_labels(&labels);
        Self {
            metadata,
            summary,
            labels,
        }
    }
}
