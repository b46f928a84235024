//! CSV export/import round-trip tests

use chrono::Utc;

use gadtrack::models::Participant;
use gadtrack::tabular::{
    export_participants, parse_rows, parse_upload, DEFAULT_EXPORT_FILENAME,
};

fn participant(id: i64, name: &str, student_id: &str, sex: &str, age: i32) -> Participant {
    let now = Utc::now();
    Participant {
        id,
        student_id: student_id.to_string(),
        full_name: name.to_string(),
        sex: sex.to_string(),
        age,
        school: "College of Arts and Sciences".to_string(),
        year_level: "3rd Year".to_string(),
        section: "A".to_string(),
        ethnic_group: "Kankanaey".to_string(),
        other_ethnic_group: None,
        event_id: 1,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn export_then_import_preserves_field_values() {
    let roster = vec![
        participant(1, "Jane Doe", "21-01-0001", "Female", 19),
        participant(2, "Cruz, Juan", "21-01-0002", "Male", 22),
    ];

    let document = export_participants(&roster, None);
    assert_eq!(document.filename, DEFAULT_EXPORT_FILENAME);

    let rows = parse_rows(&document.content);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["Name"], "Jane Doe");
    assert_eq!(rows[0]["Student ID"], "21-01-0001");
    assert_eq!(rows[0]["Sex"], "Female");
    assert_eq!(rows[0]["Age"], "19");
    assert_eq!(rows[0]["School"], "College of Arts and Sciences");
    assert_eq!(rows[0]["Year Level"], "3rd Year");
    assert_eq!(rows[0]["Ethnic Group"], "Kankanaey");

    // a comma inside a quoted name survives the round trip
    assert_eq!(rows[1]["Name"], "Cruz, Juan");
    assert_eq!(rows[1]["Age"], "22");
}

#[test]
fn export_then_import_preserves_newline_inside_quoted_name() {
    let roster = vec![participant(1, "Jane\nDoe", "21-01-0001", "Female", 19)];

    let document = export_participants(&roster, None);
    let rows = parse_rows(&document.content);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Name"], "Jane\nDoe");
    assert_eq!(rows[0]["Ethnic Group"], "Kankanaey");
}

#[test]
fn import_tolerates_crlf_and_trailing_blank_lines() {
    let roster = vec![participant(1, "Jane Doe", "21-01-0001", "Female", 19)];
    let document = export_participants(&roster, None);

    let crlf = document.content.replace('\n', "\r\n") + "\r\n\r\n";
    let rows = parse_rows(&crlf);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Name"], "Jane Doe");
}

#[test]
fn empty_roster_exports_header_only_and_imports_nothing() {
    let document = export_participants(&[], None);
    assert!(document.content.starts_with("Student ID,Name,Sex"));
    assert!(parse_rows(&document.content).is_empty());
}

#[test]
fn malformed_upload_imports_nothing() {
    assert!(parse_upload(&[0x00, 0x01, 0x02]).is_empty());
    assert!(parse_upload(b"").is_empty());
}
