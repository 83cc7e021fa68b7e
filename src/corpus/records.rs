// CSV record parsing shared by every label source.
//
// Bytes are decoded first (UTF-8 unless a legacy encoding such as
// windows-874 is configured), then read as delimited records. The header row
// is skipped and one column is taken from each remaining record.

use anyhow::{Context, Result};
use csv::StringRecord;
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

/// How to pull labels out of a delimited text file.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Zero-based column holding the label text
    pub column: usize,
    /// Whether the first record is a header to skip
    pub has_header: bool,
    pub delimiter: u8,
    /// Character encoding of the raw bytes
    pub encoding: &'static Encoding,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            column: 0,
            has_header: true,
            delimiter: b',',
            encoding: UTF_8,
        }
    }
}

impl CsvOptions {
    /// Resolve a WHATWG encoding label ("utf-8", "windows-874", "tis-620", ...).
    pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
        Encoding::for_label(label.trim().as_bytes())
            .with_context(|| format!("Unknown character encoding: {label}"))
    }
}

/// Decode raw CSV bytes and extract one label per record.
///
/// A record that lacks the configured column is an error naming its line,
/// rather than being skipped or padded with an empty label. Blank lines
/// between records count as such records; the csv reader would otherwise
/// drop them and shift every later label's position. Blank lines after the
/// last record are ignored.
pub fn parse_labels(bytes: &[u8], options: &CsvOptions) -> Result<Vec<String>> {
    let (text, actual_encoding, had_errors) = options.encoding.decode(bytes);
    if had_errors {
        anyhow::bail!(
            "Corpus is not valid {} text; set the encoding to match the file",
            actual_encoding.name()
        );
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    // Line the next record must start on; None when it can't be known
    let mut next_line = if options.has_header {
        let header = reader.headers().context("Failed to read CSV header")?;
        line_after(header)
    } else {
        Some(1)
    };

    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if let Some(expected) = next_line {
            if line > expected {
                anyhow::bail!("Missing label on line {expected}: blank row");
            }
        }
        next_line = line_after(&record);

        let Some(label) = record.get(options.column) else {
            anyhow::bail!(
                "Missing label on line {line}: record has {} fields, column {} requested",
                record.len(),
                options.column
            );
        };
        labels.push(label.to_string());
    }

    debug!(
        labels = labels.len(),
        encoding = actual_encoding.name(),
        column = options.column,
        "Parsed CSV labels"
    );

    Ok(labels)
}

/// First line after a record, counting newlines embedded in quoted fields.
fn line_after(record: &StringRecord) -> Option<u64> {
    let start = record.position()?.line();
    let embedded: u64 = record.iter().map(|f| f.matches('\n').count() as u64).sum();
    Some(start + embedded + 1)
}
