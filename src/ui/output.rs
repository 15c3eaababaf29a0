//! Console output for streamsup

use crate::core::constants::display;
use crate::core::types::StreamRecord;
use crate::validation::runner::{BatchReport, CheckOutcome};

/// One line per completed check: `[3/10] ✓ Stream [4]: Radio Name`
pub fn format_progress_line(
    completed: usize,
    total: usize,
    record: &StreamRecord,
    outcome: &CheckOutcome,
) -> String {
    let prefix = format!("[{completed}/{total}]");
    match outcome {
        CheckOutcome::Working => format!(
            "{prefix} {} Stream [{}]: {}",
            display::SUCCESS_MARK,
            record.index(),
            record.name()
        ),
        CheckOutcome::Failed => format!(
            "{prefix} {} Stream [{}]: {}",
            display::FAILURE_MARK,
            record.index(),
            record.name()
        ),
        CheckOutcome::Errored(err) => format!(
            "{prefix} {} Stream [{}]: {} - Error: {err}",
            display::FAILURE_MARK,
            record.index(),
            record.name()
        ),
    }
}

/// Results block plus the list of failed streams, if any
pub fn format_summary(report: &BatchReport) -> String {
    let rule = "=".repeat(display::RULE_WIDTH);
    let mut out = format!(
        "\n{rule}\nResults:\n  Working streams: {}\n  Failed streams: {}\n{rule}\n",
        report.working.len(),
        report.failed.len()
    );

    if !report.failed.is_empty() {
        out.push_str("\nFailed streams:\n");
        for record in &report.failed {
            out.push_str(&format!(
                "  [{}] {} - {}\n",
                record.index(),
                record.name(),
                record.url()
            ));
        }
    }

    out
}

pub fn display_parse_start() {
    println!("Parsing SII file...");
}

pub fn display_stream_count(total: usize) {
    println!("Found {total} streams total");
}

pub fn display_check_start() {
    println!("\nTesting streams (this may take a while)...");
}

pub fn display_summary(report: &BatchReport) {
    print!("{}", format_summary(report));
}

pub fn display_write_start() {
    println!("\nWriting updated file...");
}

pub fn display_write_complete(new_count: usize) {
    println!("{} File updated successfully!", display::SUCCESS_MARK);
    println!("  New stream count: {new_count}");
}

pub fn display_dry_run(new_count: usize) {
    println!("\nDry run: file not modified");
    println!("  Stream count would be: {new_count}");
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn record(index: usize, name: &str, url: &str) -> StreamRecord {
        StreamRecord::from_payload(index, &format!("{url}|{name}|Pop|EN|128|0")).unwrap()
    }

    #[test]
    fn test_format_progress_line__working() {
        let line = format_progress_line(3, 10, &record(4, "Radio A", "http://a"), &CheckOutcome::Working);

        assert_eq!(line, "[3/10] ✓ Stream [4]: Radio A");
    }

    #[test]
    fn test_format_progress_line__failed() {
        let line = format_progress_line(1, 2, &record(0, "Radio B", "http://b"), &CheckOutcome::Failed);

        assert_eq!(line, "[1/2] ✗ Stream [0]: Radio B");
    }

    #[test]
    fn test_format_progress_line__errored() {
        let line = format_progress_line(
            2,
            2,
            &record(7, "Radio C", "http://c"),
            &CheckOutcome::Errored("task 3 panicked".to_string()),
        );

        assert_eq!(line, "[2/2] ✗ Stream [7]: Radio C - Error: task 3 panicked");
    }

    #[test]
    fn test_format_summary__with_failures() {
        let report = BatchReport {
            working: vec![record(0, "Zero", "http://zero"), record(2, "Two", "http://two")],
            failed: vec![record(1, "One", "http://one")],
        };

        let summary = format_summary(&report);

        assert!(summary.contains("  Working streams: 2\n"));
        assert!(summary.contains("  Failed streams: 1\n"));
        assert!(summary.ends_with("\nFailed streams:\n  [1] One - http://one\n"));
        assert_eq!(summary.matches(&"=".repeat(60)).count(), 2);
    }

    #[test]
    fn test_format_summary__no_failures() {
        let report = BatchReport {
            working: vec![record(0, "Zero", "http://zero")],
            failed: vec![],
        };

        let summary = format_summary(&report);

        assert!(summary.contains("  Failed streams: 0\n"));
        assert!(!summary.contains("Failed streams:\n"));
    }
}
