//! Tabular exchange
//!
//! CSV export and import for events and participant rosters.

pub mod export;
pub mod import;

pub use export::{
    export_event_report, export_participants, to_csv, write_csv_file, CsvDocument,
    DEFAULT_EXPORT_FILENAME, PARTICIPANT_HEADERS,
};
pub use import::{parse_csv_record, parse_rows, parse_upload, ImportedRow};
