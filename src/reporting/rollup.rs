//! Event rollups
//!
//! Derives per-event participant counts and aggregate totals across a
//! collection of events. Pure transformations over already-fetched data.

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventType, Participant};

/// An event together with its participant roster, as composed by the
/// report service or deserialized from an external payload. A payload
/// lacking the participants field deserializes to an empty roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWithParticipants {
    pub event: Event,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Male/Female/Total counts over one participant sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantCounts {
    pub male: u32,
    pub female: u32,
    pub total: u32,
}

/// One event augmented with its derived participant counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRollup {
    pub event: Event,
    pub male_participants: u32,
    pub female_participants: u32,
    pub total_participants: u32,
}

/// Aggregate totals across the whole event collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupTotals {
    pub total_events: u32,
    pub academic_events: u32,
    pub non_academic_events: u32,
    pub total_participants: u32,
    pub total_male: u32,
    pub total_female: u32,
}

/// Per-event rows (mirroring input order) plus the grand totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    pub rows: Vec<EventRollup>,
    pub totals: RollupTotals,
}

/// Count participants by sex. A sex value outside the Male/Female
/// enumeration counts toward the total only.
pub fn count_participants<P>(participants: &[P], sex: impl Fn(&P) -> &str) -> ParticipantCounts {
    let mut counts = ParticipantCounts::default();
    for p in participants {
        counts.total += 1;
        match sex(p) {
            "Male" => counts.male += 1,
            "Female" => counts.female += 1,
            _ => {}
        }
    }
    counts
}

/// Derive the per-event counts for one event
pub fn rollup_event(record: &EventWithParticipants) -> EventRollup {
    let counts = count_participants(&record.participants, |p| p.sex.as_str());
    EventRollup {
        event: record.event.clone(),
        male_participants: counts.male,
        female_participants: counts.female,
        total_participants: counts.total,
    }
}

/// Derive per-event rows and aggregate totals over a whole collection.
///
/// Grand totals are obtained by summing the per-event fields, so
/// additivity holds by construction. Empty input yields an empty row set
/// and zero-valued totals.
pub fn rollup_events(records: &[EventWithParticipants]) -> EventReport {
    let mut totals = RollupTotals::default();
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let row = rollup_event(record);

        totals.total_events += 1;
        match record.event.event_type.as_str() {
            t if t == EventType::Academic.as_str() => totals.academic_events += 1,
            t if t == EventType::NonAcademic.as_str() => totals.non_academic_events += 1,
            _ => {}
        }
        totals.total_participants += row.total_participants;
        totals.total_male += row.male_participants;
        totals.total_female += row.female_participants;

        rows.push(row);
    }

    EventReport { rows, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn event(name: &str, event_type: EventType) -> Event {
        let now = Utc::now();
        Event {
            id: 0,
            name: name.to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            time_from: None,
            time_to: None,
            venue: "AVR Hall".to_string(),
            event_type: event_type.as_str().to_string(),
            category: "Seminar".to_string(),
            hours: 4,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn participant(sex: &str) -> Participant {
        let now = Utc::now();
        Participant {
            id: 0,
            student_id: "21-01-0001".to_string(),
            full_name: "Test Participant".to_string(),
            sex: sex.to_string(),
            age: 20,
            school: "CAS".to_string(),
            year_level: "1st Year".to_string(),
            section: "A".to_string(),
            ethnic_group: "Ilokano".to_string(),
            other_ethnic_group: None,
            event_id: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_seminar_scenario() {
        let records = vec![
            EventWithParticipants {
                event: event("Seminar A", EventType::Academic),
                participants: vec![participant("Male"), participant("Female"), participant("Female")],
            },
            EventWithParticipants {
                event: event("Seminar B", EventType::NonAcademic),
                participants: vec![],
            },
        ];

        let report = rollup_events(&records);

        assert_eq!(report.totals.total_events, 2);
        assert_eq!(report.totals.academic_events, 1);
        assert_eq!(report.totals.non_academic_events, 1);
        assert_eq!(report.totals.total_participants, 3);
        assert_eq!(report.totals.total_male, 1);
        assert_eq!(report.totals.total_female, 2);

        assert_eq!(report.rows[0].event.name, "Seminar A");
        assert_eq!(report.rows[0].male_participants, 1);
        assert_eq!(report.rows[0].female_participants, 2);
        assert_eq!(report.rows[0].total_participants, 3);

        assert_eq!(report.rows[1].event.name, "Seminar B");
        assert_eq!(report.rows[1].male_participants, 0);
        assert_eq!(report.rows[1].female_participants, 0);
        assert_eq!(report.rows[1].total_participants, 0);
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        let report = rollup_events(&[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.totals, RollupTotals::default());
    }

    #[test]
    fn test_grand_totals_are_sums_of_per_event_fields() {
        let records = vec![
            EventWithParticipants {
                event: event("A", EventType::Academic),
                participants: vec![participant("Male"), participant("Nonbinary")],
            },
            EventWithParticipants {
                event: event("B", EventType::Academic),
                participants: vec![participant("Female"); 4],
            },
        ];

        let report = rollup_events(&records);

        let sum_total: u32 = report.rows.iter().map(|r| r.total_participants).sum();
        let sum_male: u32 = report.rows.iter().map(|r| r.male_participants).sum();
        let sum_female: u32 = report.rows.iter().map(|r| r.female_participants).sum();

        assert_eq!(report.totals.total_participants, sum_total);
        assert_eq!(report.totals.total_male, sum_male);
        assert_eq!(report.totals.total_female, sum_female);
        // the unknown sex inflates the total only
        assert_eq!(report.totals.total_participants, 6);
        assert_eq!(report.totals.total_male + report.totals.total_female, 5);
    }

    #[test]
    fn test_missing_participants_field_deserializes_to_empty_roster() {
        let json = serde_json::json!({ "event": event("Orphan", EventType::Academic) });
        let record: EventWithParticipants = serde_json::from_value(json).unwrap();
        assert!(record.participants.is_empty());
        assert_eq!(rollup_event(&record).total_participants, 0);
    }
}
