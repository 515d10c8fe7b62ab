//! Integer classification over the fixed batch range.
//!
//! The classifier is a total function: every value in the range maps to
//! exactly one label, so this module has no error paths of its own. Only
//! the output sink can fail.

use crate::models::Label;
use std::io::{self, Write};
use tracing::debug;

/// First value of the batch range (inclusive).
pub const RANGE_START: u32 = 1;

/// Last value of the batch range (inclusive).
pub const RANGE_END: u32 = 100;

/// Classify a single integer.
///
/// The both-divisors case is checked first so multiples of 15 are never
/// misclassified as `Foo` or `Bar`.
pub fn label(n: u32) -> Label {
    if n % 3 == 0 && n % 5 == 0 {
        Label::Foobar
    } else if n % 3 == 0 {
        Label::Foo
    } else if n % 5 == 0 {
        Label::Bar
    } else {
        Label::Number(n)
    }
}

/// Lazily classify the whole batch range, in ascending source order.
pub fn classify_range() -> impl Iterator<Item = Label> {
    (RANGE_START..=RANGE_END).map(label)
}

/// Emit the label sequence to a writer, one display form per line.
///
/// Writes nothing but the labels. Returns the emitted sequence so callers
/// can build a report from it without re-running the classification.
pub fn emit<W: Write>(out: &mut W) -> io::Result<Vec<Label>> {
    let labels: Vec<Label> = classify_range().collect();

    for label in &labels {
        writeln!(out, "{}", label)?;
    }
    out.flush()?;

    debug!("Emitted {} labels", labels.len());
    Ok(labels)
}
