//! CSV export
//!
//! Serializes record collections to delimited text: a comma-joined header
//! line, one double-quote-wrapped line per record, and an optional trailing
//! totals row.

use std::path::{Path, PathBuf};

use crate::models::Participant;
use crate::reporting::{EventReport, EventRollup};
use crate::utils::errors::Result;
use crate::utils::helpers::sanitize_filename;

/// Filename used when the caller does not supply one
pub const DEFAULT_EXPORT_FILENAME: &str = "event_data.csv";

/// A rendered CSV document ready to be written or downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub filename: String,
    pub content: String,
}

impl CsvDocument {
    pub fn new(filename: Option<&str>, content: String) -> Self {
        let filename = filename
            .filter(|f| !f.trim().is_empty())
            .map(sanitize_filename)
            .unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());
        Self { filename, content }
    }
}

/// Quote one field: wrapped in double quotes, embedded quotes doubled
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render a header list and rows into a CSV document body.
///
/// Header labels are joined as-is; every data and totals cell is
/// quote-wrapped. Rows shorter than the header are padded with blanks.
pub fn to_csv(headers: &[&str], rows: &[Vec<String>], totals: Option<&[String]>) -> String {
    let mut out = String::new();
    out.push_str(&headers.join(","));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = (0..headers.len())
            .map(|i| quote_field(row.get(i).map(String::as_str).unwrap_or("")))
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    if let Some(totals) = totals {
        let line: Vec<String> = totals.iter().map(|v| quote_field(v)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// Export an event report: one row per event with the participant list
/// projected to its male/female/total counts, plus a grand-totals row.
pub fn export_event_report(report: &EventReport, filename: Option<&str>) -> CsvDocument {
    let headers = [
        "Event Name",
        "Date",
        "Venue",
        "Type",
        "Category",
        "Hours",
        "Participants",
        "Male",
        "Female",
    ];

    let rows: Vec<Vec<String>> = report.rows.iter().map(event_row).collect();

    let totals = vec![
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        format!("Academic: {}", report.totals.academic_events),
        format!("Non-Academic: {}", report.totals.non_academic_events),
        String::new(),
        report.totals.total_participants.to_string(),
        report.totals.total_male.to_string(),
        report.totals.total_female.to_string(),
    ];

    CsvDocument::new(filename, to_csv(&headers, &rows, Some(&totals)))
}

fn event_row(row: &EventRollup) -> Vec<String> {
    vec![
        row.event.name.clone(),
        row.event.event_date.to_string(),
        row.event.venue.clone(),
        row.event.event_type.clone(),
        row.event.category.clone(),
        row.event.hours.to_string(),
        row.total_participants.to_string(),
        row.male_participants.to_string(),
        row.female_participants.to_string(),
    ]
}

/// Header labels for participant exports; shared with the importer so a
/// round trip keys rows by the same names
pub const PARTICIPANT_HEADERS: [&str; 8] = [
    "Student ID",
    "Name",
    "Sex",
    "Age",
    "School",
    "Year Level",
    "Section",
    "Ethnic Group",
];

/// Export a participant roster, one row per participant
pub fn export_participants(participants: &[Participant], filename: Option<&str>) -> CsvDocument {
    let rows: Vec<Vec<String>> = participants
        .iter()
        .map(|p| {
            vec![
                p.student_id.clone(),
                p.full_name.clone(),
                p.sex.clone(),
                p.age.to_string(),
                p.school.clone(),
                p.year_level.clone(),
                p.section.clone(),
                p.resolved_ethnic_group().to_string(),
            ]
        })
        .collect();

    CsvDocument::new(filename, to_csv(&PARTICIPANT_HEADERS, &rows, None))
}

/// Write a document into the export directory, creating it if needed
pub fn write_csv_file(dir: &Path, document: &CsvDocument) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&document.filename);
    std::fs::write(&path, document.content.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_csv_quotes_every_field() {
        let rows = vec![vec!["Seminar, A".to_string(), "say \"hi\"".to_string()]];
        let csv = to_csv(&["Name", "Note"], &rows, None);
        assert_eq!(csv, "Name,Note\n\"Seminar, A\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_to_csv_pads_short_rows() {
        let rows = vec![vec!["only".to_string()]];
        let csv = to_csv(&["A", "B"], &rows, None);
        assert_eq!(csv, "A,B\n\"only\",\"\"\n");
    }

    #[test]
    fn test_totals_row_is_appended_last() {
        let totals = vec!["TOTAL".to_string(), "3".to_string()];
        let csv = to_csv(&["A", "B"], &[], Some(&totals));
        assert!(csv.ends_with("\"TOTAL\",\"3\"\n"));
    }

    #[test]
    fn test_default_filename() {
        let doc = CsvDocument::new(None, String::new());
        assert_eq!(doc.filename, DEFAULT_EXPORT_FILENAME);

        let doc = CsvDocument::new(Some("  "), String::new());
        assert_eq!(doc.filename, DEFAULT_EXPORT_FILENAME);

        let doc = CsvDocument::new(Some("march report.csv"), String::new());
        assert_eq!(doc.filename, "march_report.csv");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let doc = CsvDocument::new(Some("out.csv"), "A\n\"1\"\n".to_string());
        let path = write_csv_file(dir.path(), &doc).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "A\n\"1\"\n");
    }
}
