//! Report service
//!
//! Fetches record collections through the storage port, feeds them to the
//! pure reporting core, and moves CSV documents in and out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::store::{EventStore, ParticipantStore};
use crate::models::participant::{Participant, RegisterParticipantRequest, Sex};
use crate::reporting::{
    rollup_events, summarize_by_ethnic_group, summarize_by_school, summarize_by_year_level,
    CategorySummary, EventReport,
};
use crate::services::event::EventService;
use crate::tabular::{export_event_report, export_participants, parse_upload, CsvDocument, ImportedRow};
use crate::utils::errors::{GadTrackError, Result};

/// Demographic summaries over one roster or the whole participant pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicReport {
    pub by_school: Vec<CategorySummary>,
    pub by_year_level: Vec<CategorySummary>,
    pub by_ethnic_group: Vec<CategorySummary>,
}

/// Result of an import run: rows that registered and rows that did not,
/// with the reason each was skipped
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub registered: Vec<Participant>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReportService<E, P> {
    events: EventService<E, P>,
}

impl<E: EventStore, P: ParticipantStore> ReportService<E, P> {
    pub fn new(events: EventService<E, P>) -> Self {
        Self { events }
    }

    /// Roll up every event with its roster
    pub async fn event_report(&self) -> Result<EventReport> {
        let records = self.events.list_events_with_participants().await?;
        Ok(rollup_events(&records))
    }

    /// Demographic summaries for one event's roster
    pub async fn demographics_for_event(&self, event_id: i64) -> Result<DemographicReport> {
        let roster = self.events.list_participants(event_id).await?;
        Ok(Self::demographics(&roster))
    }

    /// Demographic summaries over an already-fetched roster
    pub fn demographics(participants: &[Participant]) -> DemographicReport {
        DemographicReport {
            by_school: summarize_by_school(participants),
            by_year_level: summarize_by_year_level(participants),
            by_ethnic_group: summarize_by_ethnic_group(participants),
        }
    }

    /// Export the full event rollup as a CSV document and write it into
    /// `output_dir`
    pub async fn export_event_report(
        &self,
        output_dir: &Path,
        filename: Option<&str>,
    ) -> Result<PathBuf> {
        let report = self.event_report().await?;
        let document = export_event_report(&report, filename);
        let path = crate::tabular::write_csv_file(output_dir, &document)?;
        info!(path = %path.display(), rows = report.rows.len(), "Event report exported");
        Ok(path)
    }

    /// Export one event's roster as a CSV document
    pub async fn export_roster(
        &self,
        event_id: i64,
        output_dir: &Path,
        filename: Option<&str>,
    ) -> Result<PathBuf> {
        let roster = self.events.list_participants(event_id).await?;
        let document = export_participants(&roster, filename);
        let path = crate::tabular::write_csv_file(output_dir, &document)?;
        info!(path = %path.display(), rows = roster.len(), "Roster exported");
        Ok(path)
    }

    /// Render one event's roster without touching the filesystem
    pub async fn roster_document(
        &self,
        event_id: i64,
        filename: Option<&str>,
    ) -> Result<CsvDocument> {
        let roster = self.events.list_participants(event_id).await?;
        Ok(export_participants(&roster, filename))
    }

    /// Import participants from an uploaded CSV body into one event.
    ///
    /// A malformed upload imports nothing. Rows that fail validation or
    /// duplicate an existing registration are skipped with a reason; the
    /// remaining rows register normally.
    pub async fn import_participants(&self, event_id: i64, upload: &[u8]) -> Result<ImportOutcome> {
        let rows = parse_upload(upload);
        if rows.is_empty() {
            warn!(event_id = event_id, "Import produced no rows");
            return Ok(ImportOutcome::default());
        }

        let mut outcome = ImportOutcome::default();
        for (i, row) in rows.iter().enumerate() {
            let line = i + 2; // header occupies line 1
            match row_to_request(row, event_id) {
                Ok(request) => match self.events.register_participant(request).await {
                    Ok(participant) => outcome.registered.push(participant),
                    Err(err) if err.is_user_facing() => {
                        outcome.skipped.push(format!("line {line}: {err}"));
                    }
                    Err(err) => return Err(err),
                },
                Err(err) => outcome.skipped.push(format!("line {line}: {err}")),
            }
        }

        info!(
            event_id = event_id,
            registered = outcome.registered.len(),
            skipped = outcome.skipped.len(),
            "Participant import finished"
        );
        Ok(outcome)
    }
}

/// Map one imported row onto a registration request, keyed by the same
/// header labels the exporter writes
pub fn row_to_request(row: &ImportedRow, event_id: i64) -> Result<RegisterParticipantRequest> {
    let get = |key: &str| row.get(key).map(String::as_str).unwrap_or("").to_string();

    let sex: Sex = get("Sex")
        .parse()
        .map_err(|_| GadTrackError::Validation(format!("Unknown sex: {}", get("Sex"))))?;
    let age: i32 = get("Age")
        .parse()
        .map_err(|_| GadTrackError::Validation(format!("Invalid age: {}", get("Age"))))?;

    Ok(RegisterParticipantRequest {
        student_id: get("Student ID"),
        full_name: get("Name"),
        sex,
        age,
        school: get("School"),
        year_level: get("Year Level"),
        section: get("Section"),
        ethnic_group: get("Ethnic Group"),
        other_ethnic_group: None,
        event_id,
    })
}
