//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_participants: i32,
    /// Set when the event is archived (soft delete), never cleared by the core
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Explicit lifecycle state derived from `archived_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventLifecycle {
    Active,
    Archived,
}

impl Event {
    pub fn lifecycle(&self) -> EventLifecycle {
        if self.archived_at.is_some() {
            EventLifecycle::Archived
        } else {
            EventLifecycle::Active
        }
    }

    /// An event whose date has passed no longer admits registrations
    pub fn is_closed(&self, now: DateTime<Utc>) -> bool {
        self.date < now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_participants: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub max_participants: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_event(date: DateTime<Utc>, archived: bool) -> Event {
        Event {
            id: 1,
            name: "Tech Conference".to_string(),
            description: None,
            date,
            location: "Budapest".to_string(),
            max_participants: 100,
            archived_at: archived.then(Utc::now),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_lifecycle_from_archived_at() {
        let now = Utc::now();
        assert_eq!(
            sample_event(now, false).lifecycle(),
            EventLifecycle::Active
        );
        assert_eq!(
            sample_event(now, true).lifecycle(),
            EventLifecycle::Archived
        );
    }

    #[test]
    fn test_is_closed_is_strictly_past() {
        let now = Utc::now();
        assert!(sample_event(now - Duration::hours(1), false).is_closed(now));
        assert!(!sample_event(now + Duration::hours(1), false).is_closed(now));
        assert!(!sample_event(now, false).is_closed(now));
    }
}
