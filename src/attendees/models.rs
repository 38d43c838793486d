//! Attendee listing models and data structures.
//!
//! Contains the attendee record and the paged listing response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque attendee identifier.
///
/// The listing endpoint may send either a JSON number or a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum AttendeeId {
    /// Numeric identifier
    Number(i64),
    /// Textual identifier (e.g. a UUID)
    Text(String),
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendeeId::Number(n) => write!(f, "{}", n),
            AttendeeId::Text(s) => f.write_str(s),
        }
    }
}

/// Represents an event attendee.
///
/// Attendees are owned by the remote service; the view never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Attendee identifier
    pub id: AttendeeId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
    /// Check-in timestamp, `None` when the attendee has not checked in
    pub checked_in_at: Option<DateTime<Utc>>,
}

/// One page of the attendee listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendeePage {
    /// Attendees on the requested page
    pub attendees: Vec<Attendee>,
    /// Total number of attendees matching the query (all pages)
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_attendee_page_deserializes_listing_response() {
        let json = r#"{
            "attendees": [
                {
                    "id": 446785,
                    "name": "Leandro Salles",
                    "email": "leandro.salles@email.com",
                    "createdAt": "2024-04-01T12:00:00.000Z",
                    "checkedInAt": null
                },
                {
                    "id": "b1a2c3",
                    "name": "Maria Souza",
                    "email": "maria@email.com",
                    "createdAt": "2024-04-02T08:30:00Z",
                    "checkedInAt": "2024-04-05T09:00:00Z"
                }
            ],
            "total": 228
        }"#;

        let page: AttendeePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 228);
        assert_eq!(page.attendees.len(), 2);

        let first = &page.attendees[0];
        assert_eq!(first.id, AttendeeId::Number(446785));
        assert_eq!(first.created_at, Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap());
        assert_eq!(first.checked_in_at, None);

        let second = &page.attendees[1];
        assert_eq!(second.id, AttendeeId::Text("b1a2c3".to_string()));
        assert_eq!(
            second.checked_in_at,
            Some(Utc.with_ymd_and_hms(2024, 4, 5, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_attendee_invalid_created_at_is_rejected() {
        let json = r#"{"id": 1, "name": "A", "email": "a@b.c", "createdAt": "not a date", "checkedInAt": null}"#;
        assert!(serde_json::from_str::<Attendee>(json).is_err());
    }

    #[test]
    fn test_attendee_id_display() {
        assert_eq!(AttendeeId::Number(42).to_string(), "42");
        assert_eq!(AttendeeId::Text("abc".to_string()).to_string(), "abc");
    }
}
