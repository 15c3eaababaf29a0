use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::StreamRecord;

const COUNT_TOKEN_PATTERN: &str = r"(stream_data:[ \t]*)[0-9]+";

static COUNT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(COUNT_TOKEN_PATTERN).expect("Failed to compile count token pattern"));

/// Replace the declared count in `header` with `count`, keeping its spacing.
pub fn rewrite_count(header: &str, count: usize) -> String {
    COUNT_TOKEN
        .replace_all(header, |caps: &Captures| format!("{}{count}", &caps[1]))
        .into_owned()
}

/// Render the stream list text for the given surviving records.
///
/// Records are numbered by their position in `records`, starting at 0, and
/// each one is emitted with its original payload. Record lines end the same
/// way the header does, so CRLF files stay CRLF throughout.
pub fn render_document(header: &str, records: &[StreamRecord], footer: &str) -> String {
    let line_ending = if header.ends_with("\r\n") { "\r\n" } else { "\n" };
    let mut out = rewrite_count(header, records.len());
    for (position, record) in records.iter().enumerate() {
        out.push_str(&format!(
            " stream_data[{position}]: \"{}\"{line_ending}",
            record.raw_payload()
        ));
    }
    out.push_str(footer);
    out
}

/// Overwrite `path` with the rendered stream list.
pub fn write_document<P: AsRef<Path>>(
    path: P,
    header: &str,
    records: &[StreamRecord],
    footer: &str,
) -> Result<()> {
    let path = path.as_ref();
    let contents = render_document(header, records, footer);
    fs::write(path, contents)?;

    debug!("Wrote {} streams to {}", records.len(), path.display());
    Ok(())
}
