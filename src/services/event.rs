//! Event service
//!
//! Orchestrates event and participant mutations: duplicate-name rejection,
//! duration resolution, participant registration with per-event duplicate
//! checks, and cascade deletion.

use tracing::{debug, info};

use crate::database::store::{EventStore, ParticipantStore};
use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::models::participant::{
    Participant, RegisterParticipantRequest, UpdateParticipantRequest,
};
use crate::reporting::EventWithParticipants;
use crate::utils::errors::{GadTrackError, Result};
use crate::utils::helpers::{derive_hours, normalize_whitespace};

/// Reject a registration whose name or student ID already appears in the
/// event's roster. Name comparison ignores case and whitespace
/// differences; ID comparison is exact.
pub fn check_duplicate(
    roster: &[Participant],
    full_name: &str,
    student_id: &str,
    event_id: i64,
) -> Result<()> {
    let name_key = normalize_whitespace(full_name).to_lowercase();
    for existing in roster {
        if normalize_whitespace(&existing.full_name).to_lowercase() == name_key {
            return Err(GadTrackError::DuplicateParticipant {
                event_id,
                reason: format!("a participant named '{}' already exists", existing.full_name),
            });
        }
        if existing.student_id == student_id {
            return Err(GadTrackError::DuplicateParticipant {
                event_id,
                reason: format!("student ID '{student_id}' is already registered"),
            });
        }
    }
    Ok(())
}

/// Event and participant management service over the storage port
#[derive(Debug, Clone)]
pub struct EventService<E, P> {
    events: E,
    participants: P,
}

impl<E: EventStore, P: ParticipantStore> EventService<E, P> {
    pub fn new(events: E, participants: P) -> Self {
        Self { events, participants }
    }

    /// Create an event, rejecting a name already taken (case-insensitively)
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        request.validate()?;

        if let Some(existing) = self.events.find_event_by_name(&request.name).await? {
            return Err(GadTrackError::DuplicateEventName {
                name: existing.name,
            });
        }

        let hours = request.resolve_hours();
        let event = self.events.create_event(&request, hours).await?;
        info!(event_id = event.id, name = %event.name, "Event created");

        Ok(event)
    }

    /// Update any event field except identity. When the time pair changes
    /// without an explicit duration, the stored hours are re-derived.
    pub async fn update_event(&self, id: i64, mut request: UpdateEventRequest) -> Result<Event> {
        let existing = self
            .events
            .find_event_by_id(id)
            .await?
            .ok_or(GadTrackError::EventNotFound { event_id: id })?;

        if let Some(new_name) = &request.name {
            if let Some(other) = self.events.find_event_by_name(new_name).await? {
                if other.id != existing.id {
                    return Err(GadTrackError::DuplicateEventName {
                        name: other.name,
                    });
                }
            }
        }

        if request.hours.is_none()
            && (request.time_from.is_some() || request.time_to.is_some())
        {
            let from = request.time_from.or(existing.time_from);
            let to = request.time_to.or(existing.time_to);
            if let (Some(from), Some(to)) = (from, to) {
                request.hours = Some(derive_hours(from, to));
            }
        }

        let event = self.events.update_event(id, &request).await?;
        info!(event_id = id, "Event updated");

        Ok(event)
    }

    /// Delete an event and, by cascade, every participant registered
    /// against it
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        if self.events.find_event_by_id(id).await?.is_none() {
            return Err(GadTrackError::EventNotFound { event_id: id });
        }

        let roster = self.participants.list_participants_by_event(id).await?;
        self.events.delete_event(id).await?;
        info!(
            event_id = id,
            cascaded_participants = roster.len(),
            "Event deleted"
        );

        Ok(())
    }

    pub async fn get_event(&self, id: i64) -> Result<Event> {
        self.events
            .find_event_by_id(id)
            .await?
            .ok_or(GadTrackError::EventNotFound { event_id: id })
    }

    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.events.list_events().await
    }

    /// Fetch every event together with its roster, ready for rollup
    pub async fn list_events_with_participants(&self) -> Result<Vec<EventWithParticipants>> {
        let events = self.events.list_events().await?;
        let mut records = Vec::with_capacity(events.len());
        for event in events {
            let participants = self
                .participants
                .list_participants_by_event(event.id)
                .await?;
            records.push(EventWithParticipants { event, participants });
        }
        Ok(records)
    }

    /// Register one participant against an event. Duplicate names and
    /// student IDs within the event are rejected before persistence.
    pub async fn register_participant(
        &self,
        request: RegisterParticipantRequest,
    ) -> Result<Participant> {
        request.validate()?;

        if self
            .events
            .find_event_by_id(request.event_id)
            .await?
            .is_none()
        {
            return Err(GadTrackError::EventNotFound {
                event_id: request.event_id,
            });
        }

        let roster = self
            .participants
            .list_participants_by_event(request.event_id)
            .await?;
        check_duplicate(&roster, &request.full_name, &request.student_id, request.event_id)?;

        let participant = self.participants.register_participant(&request).await?;
        debug!(
            participant_id = participant.id,
            event_id = request.event_id,
            "Participant registered"
        );

        Ok(participant)
    }

    /// Update a participant, re-running the duplicate check when the name
    /// or student ID changes
    pub async fn update_participant(
        &self,
        id: i64,
        request: UpdateParticipantRequest,
    ) -> Result<Participant> {
        let existing = self
            .participants
            .find_participant_by_id(id)
            .await?
            .ok_or(GadTrackError::ParticipantNotFound { participant_id: id })?;

        if request.full_name.is_some() || request.student_id.is_some() {
            let roster: Vec<Participant> = self
                .participants
                .list_participants_by_event(existing.event_id)
                .await?
                .into_iter()
                .filter(|p| p.id != id)
                .collect();
            let name = request.full_name.as_deref().unwrap_or(&existing.full_name);
            let student_id = request
                .student_id
                .as_deref()
                .unwrap_or(&existing.student_id);
            check_duplicate(&roster, name, student_id, existing.event_id)?;
        }

        let participant = self.participants.update_participant(id, &request).await?;
        debug!(participant_id = id, "Participant updated");

        Ok(participant)
    }

    /// Delete a participant from its owning event's roster
    pub async fn delete_participant(&self, id: i64) -> Result<()> {
        let existing = self
            .participants
            .find_participant_by_id(id)
            .await?
            .ok_or(GadTrackError::ParticipantNotFound { participant_id: id })?;

        self.participants.delete_participant(id).await?;
        debug!(
            participant_id = id,
            event_id = existing.event_id,
            "Participant deleted"
        );

        Ok(())
    }

    pub async fn list_participants(&self, event_id: i64) -> Result<Vec<Participant>> {
        self.participants.list_participants_by_event(event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;

    fn participant(full_name: &str, student_id: &str) -> Participant {
        let now = Utc::now();
        Participant {
            id: 1,
            student_id: student_id.to_string(),
            full_name: full_name.to_string(),
            sex: "Female".to_string(),
            age: 19,
            school: "CAS".to_string(),
            year_level: "2nd Year".to_string(),
            section: "B".to_string(),
            ethnic_group: "Ilokano".to_string(),
            other_ethnic_group: None,
            event_id: 7,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_same_name_any_id_rejected() {
        let roster = [participant("Jane Doe", "21-01-0001")];
        let result = check_duplicate(&roster, "Jane Doe", "21-01-9999", 7);
        assert_matches!(
            result,
            Err(GadTrackError::DuplicateParticipant { event_id: 7, .. })
        );
    }

    #[test]
    fn test_same_id_any_name_rejected() {
        let roster = [participant("Jane Doe", "21-01-0001")];
        let result = check_duplicate(&roster, "Maria Santos", "21-01-0001", 7);
        assert_matches!(
            result,
            Err(GadTrackError::DuplicateParticipant { event_id: 7, .. })
        );
    }

    #[test]
    fn test_name_match_ignores_case_and_whitespace() {
        let roster = [participant("Jane Doe", "21-01-0001")];
        let result = check_duplicate(&roster, "  jane doe ", "21-01-9999", 7);
        assert!(result.is_err());

        // inner whitespace runs collapse before comparison
        let result = check_duplicate(&roster, "Jane   Doe", "21-01-9999", 7);
        assert!(result.is_err());
    }

    #[test]
    fn test_distinct_participant_accepted() {
        let roster = [participant("Jane Doe", "21-01-0001")];
        assert!(check_duplicate(&roster, "Maria Santos", "21-01-0002", 7).is_ok());
    }

    #[test]
    fn test_empty_roster_accepts_anyone() {
        assert!(check_duplicate(&[], "Jane Doe", "21-01-0001", 7).is_ok());
    }
}
