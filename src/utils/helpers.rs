//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveTime;

/// Derive a duration in whole hours from a time-from/time-to pair.
///
/// An inverted or equal pair derives zero, never a negative count.
pub fn derive_hours(time_from: NaiveTime, time_to: NaiveTime) -> i32 {
    let seconds = (time_to - time_from).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds / 3600) as i32
    }
}

/// Basic email shape check: local part, one '@', dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Extract the domain portion of an email address, lowercased
pub fn email_domain(email: &str) -> Option<String> {
    email.split_once('@').map(|(_, d)| d.to_lowercase())
}

/// Generate a random alphanumeric string
pub fn generate_random_string(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Sanitize filename for safe storage
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Collapse runs of whitespace to single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_hours() {
        let from = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let to = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(derive_hours(from, to), 4);
    }

    #[test]
    fn test_derive_hours_truncates_to_whole_hours() {
        let from = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let to = NaiveTime::from_hms_opt(10, 59, 0).unwrap();
        assert_eq!(derive_hours(from, to), 2);
    }

    #[test]
    fn test_derive_hours_inverted_pair_is_zero() {
        let from = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
        let to = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(derive_hours(from, to), 0);
        assert_eq!(derive_hours(from, from), 0);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("officer@university.edu.ph"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@university.edu.ph"));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(
            email_domain("Officer@University.EDU.PH"),
            Some("university.edu.ph".to_string())
        );
        assert_eq!(email_domain("plain"), None);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("event data.csv"), "event_data.csv");
        assert_eq!(sanitize_filename("a/b\\c.csv"), "a_b_c.csv");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Jane   Doe "), "Jane Doe");
        assert_eq!(normalize_whitespace("Jane\tDoe"), "Jane Doe");
    }

    #[test]
    fn test_generate_random_string() {
        let s = generate_random_string(8);
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
