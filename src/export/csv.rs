// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Fixed column order of the export.
pub const CSV_HEADER: [&str; 7] = ["id", "timestamp", "type", "value", "vlog_path", "lat", "lng"];

/// Wrap in double quotes as-is. Embedded quotes are not escaped, so a value
/// containing `"` produces a broken row; the wire format depends on it.
fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

fn number(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn record_to_row(r: &Record) -> [String; 7] {
    [
        r.id.to_string(),
        quoted(&r.timestamp),
        quoted(r.kind.as_str()),
        quoted(&r.value),
        r.vlog_path.as_deref().map(quoted).unwrap_or_default(),
        number(r.lat),
        number(r.lng),
    ]
}

/// Render the log as a CSV document: header plus one line per record,
/// `\n`-separated, no trailing newline. `None` when there is nothing to
/// export.
pub fn render_csv(records: &[Record]) -> AppResult<Option<String>> {
    if records.is_empty() {
        return Ok(None);
    }

    // quoting is done per column above; the writer only joins fields
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for r in records {
        wtr.write_record(record_to_row(r))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let mut doc =
        String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    if doc.ends_with('\n') {
        doc.pop();
    }

    Ok(Some(doc))
}
