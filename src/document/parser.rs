use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use std::fs;
use std::io;
use std::path::Path;

use crate::core::constants::sii;
use crate::core::error::{Result, StreamsUpError};
use crate::core::types::StreamRecord;
use crate::document::SiiDocument;

const COUNT_LINE_PATTERN: &str = r"stream_data:[ \t]*[0-9]+[ \t]*\r?\n";
const FOOTER_PATTERN: &str = r"\r?\n(\}\r?\n\r?\n\})[ \t\r\n]*$";
const RECORD_PATTERN: &str = r#"stream_data\[([0-9]+)\]:[ \t]*"(.*?)""#;

static COUNT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(COUNT_LINE_PATTERN).expect("Failed to compile count line pattern"));

static FOOTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(FOOTER_PATTERN).expect("Failed to compile footer pattern"));

static RECORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(RECORD_PATTERN).expect("Failed to compile record pattern"));

/// Read a stream list from disk and parse it.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SiiDocument> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => StreamsUpError::FileNotFound(path.display().to_string()),
        _ => StreamsUpError::Io(err),
    })?;

    Ok(parse_document(&contents))
}

/// Split a stream list into its header, records and footer.
///
/// Parsing never fails: a missing header yields an empty header, a missing
/// footer yields the default closer, and entries whose payload does not have
/// exactly six fields are skipped.
pub fn parse_document(contents: &str) -> SiiDocument {
    let header = extract_header(contents).to_string();
    let footer = extract_footer(contents).to_string();
    let records = extract_records(contents);

    debug!(
        "Parsed stream list: header={} bytes, records={}, footer={} bytes",
        header.len(),
        records.len(),
        footer.len()
    );

    SiiDocument {
        header,
        records,
        footer,
    }
}

/// Everything up to and including the first `stream_data: <count>` line
fn extract_header(contents: &str) -> &str {
    COUNT_LINE
        .find(contents)
        .map_or("", |count_line| &contents[..count_line.end()])
}

fn extract_footer(contents: &str) -> &str {
    FOOTER
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map_or(sii::DEFAULT_FOOTER, |footer| footer.as_str())
}

fn extract_records(contents: &str) -> Vec<StreamRecord> {
    RECORD
        .captures_iter(contents)
        .filter_map(|caps| {
            let declared = &caps[1];
            let payload = &caps[2];

            let Ok(index) = declared.parse::<usize>() else {
                debug!("Skipping stream_data[{declared}]: index out of range");
                return None;
            };

            let record = StreamRecord::from_payload(index, payload);
            if record.is_none() {
                debug!(
                    "Skipping stream_data[{index}]: expected {} fields",
                    sii::FIELD_COUNT
                );
            }
            record
        })
        .collect()
}
