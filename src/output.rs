//! CLI output formatting for single-file and batch conversion.
//!
//! Each mode has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Original size: 4000x3000
//! Final size: 4000x2250
//! Aspect ratio: 1.778 (16:9 = 1.778)
//! Saved to: photos/dawn_16_9.jpg
//! ```

use crate::batch::{BatchEntry, BatchSummary};
use crate::imaging::ConversionReport;

/// Format a successful conversion: original and final size, the resulting
/// aspect ratio against the 16:9 reference, and the saved path.
pub fn format_report(report: &ConversionReport) -> Vec<String> {
    vec![
        format!("Original size: {}", report.original),
        format!("Final size: {}", report.converted),
        format!(
            "Aspect ratio: {:.3} (16:9 = {:.3})",
            report.converted.aspect_ratio(),
            16.0 / 9.0
        ),
        format!("Saved to: {}", report.output.display()),
    ]
}

/// Print a conversion report to stdout.
pub fn print_report(report: &ConversionReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

/// Format one batch entry: a header with the source file, then the
/// conversion report or the error, indented.
pub fn format_batch_entry(entry: &BatchEntry) -> Vec<String> {
    let mut lines = vec![format!("Processing: {}", entry.source.display())];
    match &entry.outcome {
        Ok(report) => {
            lines.extend(format_report(report).into_iter().map(|l| format!("    {l}")));
        }
        Err(err) => lines.push(format!("    Error: {err}")),
    }
    lines
}

/// Print a batch entry to stdout, followed by a blank separator line.
pub fn print_batch_entry(entry: &BatchEntry) {
    for line in format_batch_entry(entry) {
        println!("{}", line);
    }
    println!();
}

/// Format the end-of-batch summary line.
pub fn format_batch_summary(summary: &BatchSummary) -> String {
    format!(
        "Converted: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{ConvertError, ConversionReport, Dimensions, ResizeMethod};
    use std::path::PathBuf;

    fn sample_report() -> ConversionReport {
        ConversionReport {
            original: Dimensions::new(4000, 3000),
            converted: Dimensions::new(4000, 2250),
            method: ResizeMethod::Crop,
            output: PathBuf::from("out/dawn.jpg"),
        }
    }

    #[test]
    fn report_lines_show_sizes_and_ratio() {
        let lines = format_report(&sample_report());
        assert_eq!(lines[0], "Original size: 4000x3000");
        assert_eq!(lines[1], "Final size: 4000x2250");
        assert_eq!(lines[2], "Aspect ratio: 1.778 (16:9 = 1.778)");
        assert_eq!(lines[3], "Saved to: out/dawn.jpg");
    }

    #[test]
    fn batch_entry_success_indents_report() {
        let entry = BatchEntry {
            source: PathBuf::from("in/dawn.jpg"),
            output: PathBuf::from("out/dawn.jpg"),
            outcome: Ok(sample_report()),
        };
        let lines = format_batch_entry(&entry);
        assert_eq!(lines[0], "Processing: in/dawn.jpg");
        assert_eq!(lines[1], "    Original size: 4000x3000");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn batch_entry_failure_shows_error() {
        let entry = BatchEntry {
            source: PathBuf::from("in/broken.jpg"),
            output: PathBuf::from("out/broken.jpg"),
            outcome: Err(ConvertError::InvalidDimensions("truncated file".into())),
        };
        let lines = format_batch_entry(&entry);
        assert_eq!(lines[1], "    Error: invalid image: truncated file");
    }

    #[test]
    fn summary_counts_both_outcomes() {
        let summary = BatchSummary {
            entries: vec![
                BatchEntry {
                    source: PathBuf::from("a.jpg"),
                    output: PathBuf::from("o/a.jpg"),
                    outcome: Ok(sample_report()),
                },
                BatchEntry {
                    source: PathBuf::from("b.jpg"),
                    output: PathBuf::from("o/b.jpg"),
                    outcome: Err(ConvertError::InvalidDimensions("bad".into())),
                },
            ],
        };
        assert_eq!(format_batch_summary(&summary), "Converted: 1 succeeded, 1 failed");
    }
}
