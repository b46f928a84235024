//! Participant model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::{GadTrackError, Result};

/// Sex enumeration used when validating new registrations.
///
/// Stored participants keep sex as text so that imported records with
/// out-of-enumeration values still aggregate (they count toward totals
/// only, never toward the Male/Female sub-counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sex {
    type Err = GadTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            other => Err(GadTrackError::InvalidInput(format!("Unknown sex: {other}"))),
        }
    }
}

/// Ethnic group label used when the free-text override applies
pub const ETHNIC_GROUP_OTHER: &str = "Other";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: i64,
    pub student_id: String,
    pub full_name: String,
    pub sex: String,
    pub age: i32,
    pub school: String,
    pub year_level: String,
    pub section: String,
    pub ethnic_group: String,
    pub other_ethnic_group: Option<String>,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    /// Resolve the ethnic group, substituting the free-text override
    /// when the stored group is "Other"
    pub fn resolved_ethnic_group(&self) -> &str {
        if self.ethnic_group == ETHNIC_GROUP_OTHER {
            self.other_ethnic_group
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(ETHNIC_GROUP_OTHER)
        } else {
            &self.ethnic_group
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    pub student_id: String,
    pub full_name: String,
    pub sex: Sex,
    pub age: i32,
    pub school: String,
    pub year_level: String,
    pub section: String,
    pub ethnic_group: String,
    pub other_ethnic_group: Option<String>,
    pub event_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateParticipantRequest {
    pub student_id: Option<String>,
    pub full_name: Option<String>,
    pub sex: Option<Sex>,
    pub age: Option<i32>,
    pub school: Option<String>,
    pub year_level: Option<String>,
    pub section: Option<String>,
    pub ethnic_group: Option<String>,
    pub other_ethnic_group: Option<String>,
}

/// Institution student-ID format: two digits, two digits, four digits
pub fn is_valid_student_id(student_id: &str) -> bool {
    use std::sync::OnceLock;
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| regex::Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap());
    re.is_match(student_id)
}

impl RegisterParticipantRequest {
    /// Validate the request against the shared participant schema
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "Participant name is required".to_string(),
            ));
        }
        if !is_valid_student_id(&self.student_id) {
            return Err(GadTrackError::Validation(format!(
                "Student ID must match the format 00-00-0000, got: {}",
                self.student_id
            )));
        }
        if self.age <= 0 {
            return Err(GadTrackError::Validation(
                "Age must be a positive integer".to_string(),
            ));
        }
        if self.school.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "School/department is required".to_string(),
            ));
        }
        if self.year_level.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "Year level is required".to_string(),
            ));
        }
        if self.ethnic_group.trim().is_empty() {
            return Err(GadTrackError::Validation(
                "Ethnic group is required".to_string(),
            ));
        }
        if self.ethnic_group == ETHNIC_GROUP_OTHER
            && self
                .other_ethnic_group
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
        {
            return Err(GadTrackError::Validation(
                "Ethnic group override is required when 'Other' is selected".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterParticipantRequest {
        RegisterParticipantRequest {
            student_id: "21-01-0001".to_string(),
            full_name: "Jane Doe".to_string(),
            sex: Sex::Female,
            age: 19,
            school: "College of Education".to_string(),
            year_level: "2nd Year".to_string(),
            section: "B".to_string(),
            ethnic_group: "Ilokano".to_string(),
            other_ethnic_group: None,
            event_id: 1,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_student_id_pattern() {
        assert!(is_valid_student_id("21-01-0001"));
        assert!(!is_valid_student_id("2101-0001"));
        assert!(!is_valid_student_id("21-01-001"));
        assert!(!is_valid_student_id("ab-cd-efgh"));
        assert!(!is_valid_student_id(" 21-01-0001"));
    }

    #[test]
    fn test_malformed_student_id_rejected() {
        let mut req = request();
        req.student_id = "21010001".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_positive_age_rejected() {
        let mut req = request();
        req.age = 0;
        assert!(req.validate().is_err());
        req.age = -3;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_other_ethnic_group_requires_override() {
        let mut req = request();
        req.ethnic_group = ETHNIC_GROUP_OTHER.to_string();
        req.other_ethnic_group = None;
        assert!(req.validate().is_err());

        req.other_ethnic_group = Some("  ".to_string());
        assert!(req.validate().is_err());

        req.other_ethnic_group = Some("Ibanag".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_resolved_ethnic_group() {
        let now = Utc::now();
        let mut p = Participant {
            id: 1,
            student_id: "21-01-0001".to_string(),
            full_name: "Jane Doe".to_string(),
            sex: "Female".to_string(),
            age: 19,
            school: "College of Education".to_string(),
            year_level: "2nd Year".to_string(),
            section: "B".to_string(),
            ethnic_group: ETHNIC_GROUP_OTHER.to_string(),
            other_ethnic_group: Some("Ibanag".to_string()),
            event_id: 1,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(p.resolved_ethnic_group(), "Ibanag");

        p.ethnic_group = "Tagalog".to_string();
        assert_eq!(p.resolved_ethnic_group(), "Tagalog");
    }
}
