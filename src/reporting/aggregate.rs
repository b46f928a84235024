//! Demographic aggregation
//!
//! Groups participant-like records into count buckets per attribute value,
//! cross-tabulated by sex. All functions here are pure: they never touch
//! the database and are safe to call concurrently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// Bucket name used when a record's grouping key is missing.
///
/// Missing keys are bucketed rather than rejected; callers that want to
/// treat them as errors can filter the summary afterwards.
pub const UNDEFINED_BUCKET: &str = "undefined";

/// One grouping-key value paired with Male/Female/Total counts.
///
/// `total` counts every record in the category. A record whose sex is
/// neither exactly "Male" nor exactly "Female" contributes to `total`
/// only, so `male + female <= total` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub male: u32,
    pub female: u32,
    pub total: u32,
}

impl CategorySummary {
    fn new(name: String) -> Self {
        Self {
            name,
            male: 0,
            female: 0,
            total: 0,
        }
    }
}

/// Summarize records by an arbitrary grouping key, cross-tabulated by sex.
///
/// One row is produced per distinct key value, in first-seen order.
/// Records with a missing key land in the [`UNDEFINED_BUCKET`] row.
/// Empty input yields an empty vector.
pub fn summarize_by<T>(
    records: &[T],
    group_key: impl Fn(&T) -> Option<String>,
    sex: impl Fn(&T) -> &str,
) -> Vec<CategorySummary> {
    let mut rows: Vec<CategorySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = group_key(record).unwrap_or_else(|| UNDEFINED_BUCKET.to_string());
        let idx = *index.entry(key.clone()).or_insert_with(|| {
            rows.push(CategorySummary::new(key));
            rows.len() - 1
        });

        let row = &mut rows[idx];
        row.total += 1;
        match sex(record) {
            "Male" => row.male += 1,
            "Female" => row.female += 1,
            // any other value counts toward the total only
            _ => {}
        }
    }

    rows
}

/// Summarize stored participants by school/department
pub fn summarize_by_school(participants: &[Participant]) -> Vec<CategorySummary> {
    summarize_by(participants, |p| Some(p.school.clone()), |p| p.sex.as_str())
}

/// Summarize stored participants by year level
pub fn summarize_by_year_level(participants: &[Participant]) -> Vec<CategorySummary> {
    summarize_by(
        participants,
        |p| Some(p.year_level.clone()),
        |p| p.sex.as_str(),
    )
}

/// Summarize stored participants by ethnic group, resolving the free-text
/// override for "Other"
pub fn summarize_by_ethnic_group(participants: &[Participant]) -> Vec<CategorySummary> {
    summarize_by(
        participants,
        |p| Some(p.resolved_ethnic_group().to_string()),
        |p| p.sex.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        group: Option<&'static str>,
        sex: &'static str,
    }

    fn summarize(records: &[Record]) -> Vec<CategorySummary> {
        summarize_by(records, |r| r.group.map(str::to_string), |r| r.sex)
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_ethnic_group_scenario() {
        let records = [
            Record { group: Some("Ilokano"), sex: "Male" },
            Record { group: Some("Ilokano"), sex: "Female" },
            Record { group: Some("Tagalog"), sex: "Male" },
        ];
        let rows = summarize(&records);
        assert_eq!(rows.len(), 2);

        let ilokano = rows.iter().find(|r| r.name == "Ilokano").unwrap();
        assert_eq!((ilokano.male, ilokano.female, ilokano.total), (1, 1, 2));

        let tagalog = rows.iter().find(|r| r.name == "Tagalog").unwrap();
        assert_eq!((tagalog.male, tagalog.female, tagalog.total), (1, 0, 1));
    }

    #[test]
    fn test_total_equals_male_plus_female_for_known_sexes() {
        let records = [
            Record { group: Some("CAS"), sex: "Male" },
            Record { group: Some("CAS"), sex: "Female" },
            Record { group: Some("CAS"), sex: "Female" },
        ];
        let rows = summarize(&records);
        assert_eq!(rows[0].total, rows[0].male + rows[0].female);
    }

    #[test]
    fn test_unknown_sex_counts_toward_total_only() {
        let records = [
            Record { group: Some("CAS"), sex: "Male" },
            Record { group: Some("CAS"), sex: "Prefer not to say" },
            Record { group: Some("CAS"), sex: "" },
        ];
        let rows = summarize(&records);
        assert_eq!(rows[0].total, 3);
        assert_eq!(rows[0].male, 1);
        assert_eq!(rows[0].female, 0);
        assert!(rows[0].male + rows[0].female < rows[0].total);
    }

    #[test]
    fn test_sex_matching_is_exact() {
        // no trimming or case folding on the sex value
        let records = [
            Record { group: Some("CAS"), sex: "male" },
            Record { group: Some("CAS"), sex: " Male" },
        ];
        let rows = summarize(&records);
        assert_eq!(rows[0].male, 0);
        assert_eq!(rows[0].total, 2);
    }

    #[test]
    fn test_missing_group_key_buckets_under_undefined() {
        let records = [
            Record { group: None, sex: "Female" },
            Record { group: Some("CAS"), sex: "Male" },
            Record { group: None, sex: "Male" },
        ];
        let rows = summarize(&records);
        let undefined = rows.iter().find(|r| r.name == UNDEFINED_BUCKET).unwrap();
        assert_eq!((undefined.male, undefined.female, undefined.total), (1, 1, 2));
    }

    #[test]
    fn test_rows_in_first_seen_order() {
        let records = [
            Record { group: Some("B"), sex: "Male" },
            Record { group: Some("A"), sex: "Male" },
            Record { group: Some("B"), sex: "Female" },
        ];
        let rows = summarize(&records);
        assert_eq!(rows[0].name, "B");
        assert_eq!(rows[1].name, "A");
    }
}
