//! CSV import
//!
//! Parses an uploaded delimited file into header-keyed row maps. Malformed
//! uploads (binary data, zero rows) yield an empty result — "nothing
//! imported" — rather than an error.

use std::collections::HashMap;

/// One imported row, keyed by the header labels of the first line
pub type ImportedRow = HashMap<String, String>;

/// Parse one CSV record, honoring double-quoted fields with embedded
/// commas and doubled quotes
pub fn parse_csv_record(line: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0usize;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '"' {
            if in_quotes && i + 1 < chars.len() && chars[i + 1] == '"' {
                buf.push('"');
                i += 2;
                continue;
            }
            in_quotes = !in_quotes;
            i += 1;
            continue;
        }
        if ch == ',' && !in_quotes {
            out.push(buf);
            buf = String::new();
            i += 1;
            continue;
        }
        buf.push(ch);
        i += 1;
    }
    out.push(buf);
    out
}

/// Split CSV text into records. A newline inside a double-quoted field
/// stays part of the field; only unquoted newlines end a record.
fn split_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;
    for ch in text.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                buf.push(ch);
            }
            '\n' if !in_quotes => {
                if buf.ends_with('\r') {
                    buf.pop();
                }
                records.push(std::mem::take(&mut buf));
            }
            _ => buf.push(ch),
        }
    }
    if !buf.is_empty() {
        records.push(buf);
    }
    records
}

/// Parse CSV text into header-keyed rows.
///
/// The first record supplies the header labels; each subsequent non-blank
/// record becomes one row map. Windows and Unix line endings are both
/// accepted, quoted fields may span lines, all-blank rows and trailing
/// blank lines are skipped, and a document with no data rows yields an
/// empty vector.
pub fn parse_rows(text: &str) -> Vec<ImportedRow> {
    let mut records = split_records(text).into_iter();

    let Some(header_line) = records.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = parse_csv_record(&header_line)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for record in records {
        let fields = parse_csv_record(&record);
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let mut row = ImportedRow::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = fields.get(i).map(String::as_str).unwrap_or("").trim();
            row.insert(header.clone(), value.to_string());
        }
        rows.push(row);
    }

    rows
}

/// Parse an uploaded file body. Bytes that are not valid UTF-8 text (a
/// binary spreadsheet, for instance) import nothing.
pub fn parse_upload(bytes: &[u8]) -> Vec<ImportedRow> {
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.contains('\0') => parse_rows(text),
        _ => Vec::new(),
    }
}
