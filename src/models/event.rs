//! Event model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::{GadTrackError, Result};
use crate::utils::helpers::derive_hours;

/// Fixed event type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Academic,
    NonAcademic,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Academic => "Academic",
            EventType::NonAcademic => "Non-Academic",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = GadTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Academic" => Ok(EventType::Academic),
            "Non-Academic" => Ok(EventType::NonAcademic),
            other => Err(GadTrackError::InvalidInput(format!(
                "Unknown event type: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub event_date: NaiveDate,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    pub venue: String,
    pub event_type: String,
    pub category: String,
    pub hours: i32,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub event_date: NaiveDate,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    pub venue: String,
    pub event_type: EventType,
    pub category: String,
    /// Duration in hours; derived from the time pair when absent
    pub hours: Option<i32>,
    pub created_by: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    pub venue: Option<String>,
    pub event_type: Option<EventType>,
    pub category: Option<String>,
    pub hours: Option<i32>,
}

impl CreateEventRequest {
    /// Validate the request against the shared event schema
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "Event name is required".to_string(),
            ));
        }
        if self.venue.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "Event venue is required".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "Event category is required".to_string(),
            ));
        }
        if self.hours.is_none() && (self.time_from.is_none() || self.time_to.is_none()) {
            return Err(GadTrackError::Validation(
                "Either hours or a time-from/time-to pair is required".to_string(),
            ));
        }
        if let Some(hours) = self.hours {
            if hours < 0 {
                return Err(GadTrackError::Validation(
                    "Hours must be non-negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolve the event duration: supplied hours win, otherwise it is
    /// derived from the time pair
    pub fn resolve_hours(&self) -> i32 {
        match (self.hours, self.time_from, self.time_to) {
            (Some(hours), _, _) => hours,
            (None, Some(from), Some(to)) => derive_hours(from, to),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Gender Sensitivity Seminar".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            time_from: Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
            time_to: Some(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            venue: "AVR Hall".to_string(),
            event_type: EventType::Academic,
            category: "Seminar".to_string(),
            hours: None,
            created_by: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
        assert_eq!(request().resolve_hours(), 4);
    }

    #[test]
    fn test_supplied_hours_win_over_time_pair() {
        let mut req = request();
        req.hours = Some(6);
        assert_eq!(req.resolve_hours(), 6);
    }

    #[test]
    fn test_missing_duration_sources_rejected() {
        let mut req = request();
        req.hours = None;
        req.time_to = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut req = request();
        req.name = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_event_type_round_trip() {
        assert_eq!(
            "Non-Academic".parse::<EventType>().unwrap(),
            EventType::NonAcademic
        );
        assert_eq!(EventType::Academic.to_string(), "Academic");
        assert!("Sports".parse::<EventType>().is_err());
    }
}
