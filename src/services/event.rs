//! Event service implementation
//!
//! Admin-gated event CRUD with explicit per-field validation and the
//! Active -> Archived lifecycle. Archiving keeps historical registrations.

use tracing::{debug, info};

use crate::database::{DatabaseService, EventFilter};
use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::services::auth::AuthContext;
use crate::services::policy;
use crate::utils::errors::{EventhubError, Result};
use crate::utils::validation::{self, ValidationErrors};

#[derive(Debug, Clone)]
pub struct EventService {
    db: DatabaseService,
}

impl EventService {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a new event, admin only
    pub async fn create(&self, request: CreateEventRequest, caller: &AuthContext) -> Result<Event> {
        policy::require_admin(caller, "event creation")?;
        validate_create(&request)?;

        let event = self.db.events.create(request).await?;
        info!(event_id = event.id, admin_id = caller.user_id, "Event created");

        Ok(event)
    }

    /// Get a single event with its registrations' visibility rules applied
    pub async fn get(&self, event_id: i64, include_archived: bool) -> Result<Event> {
        self.db
            .events
            .find_by_id(event_id, include_archived)
            .await?
            .ok_or(EventhubError::EventNotFound { event_id })
    }

    /// Apply a partial update to an active event, admin only
    pub async fn update(
        &self,
        event_id: i64,
        request: UpdateEventRequest,
        caller: &AuthContext,
    ) -> Result<Event> {
        policy::require_admin(caller, "event update")?;
        validate_update(&request)?;

        let event = self
            .db
            .events
            .update(event_id, request)
            .await?
            .ok_or(EventhubError::EventNotFound { event_id })?;

        info!(event_id = event_id, admin_id = caller.user_id, "Event updated");
        Ok(event)
    }

    /// Archive an event (soft delete), admin only
    pub async fn archive(&self, event_id: i64, caller: &AuthContext) -> Result<()> {
        policy::require_admin(caller, "event deletion")?;

        let archived = self.db.events.archive(event_id).await?;
        if !archived {
            return Err(EventhubError::EventNotFound { event_id });
        }

        info!(event_id = event_id, admin_id = caller.user_id, "Event archived");
        Ok(())
    }

    /// List active events with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Event>> {
        debug!(limit = limit, offset = offset, "Listing events");
        self.db.events.list(limit, offset).await
    }

    /// List upcoming active events
    pub async fn upcoming(&self, limit: i64, offset: i64) -> Result<Vec<Event>> {
        self.db.events.upcoming(limit, offset).await
    }

    /// List past active events
    pub async fn past(&self, limit: i64, offset: i64) -> Result<Vec<Event>> {
        self.db.events.past(limit, offset).await
    }

    /// Filter active events by date range and location
    pub async fn filter(&self, filter: EventFilter, limit: i64, offset: i64) -> Result<Vec<Event>> {
        self.db.events.filter(filter, limit, offset).await
    }
}

fn validate_create(request: &CreateEventRequest) -> Result<()> {
    let mut errors = ValidationErrors::new();
    validation::require_string(&mut errors, "name", &request.name, 255);
    validation::require_string(&mut errors, "location", &request.location, 255);
    if request.max_participants < 1 {
        errors.push("max_participants", "must be at least 1");
    }
    errors.into_result()
}

fn validate_update(request: &UpdateEventRequest) -> Result<()> {
    let mut errors = ValidationErrors::new();
    if let Some(ref name) = request.name {
        validation::require_string(&mut errors, "name", name, 255);
    }
    if let Some(ref location) = request.location {
        validation::require_string(&mut errors, "location", location, 255);
    }
    if let Some(max) = request.max_participants {
        if max < 1 {
            errors.push("max_participants", "must be at least 1");
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    fn create_request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Tech Conference 2026".to_string(),
            description: Some("Annual conference".to_string()),
            date: Utc::now() + Duration::days(30),
            location: "Budapest".to_string(),
            max_participants: 100,
        }
    }

    #[test]
    fn test_validate_create_accepts_valid_payload() {
        assert!(validate_create(&create_request()).is_ok());
    }

    #[test]
    fn test_validate_create_collects_field_errors() {
        let mut request = create_request();
        request.name = String::new();
        request.location = String::new();
        request.max_participants = 0;

        let result = validate_create(&request);
        assert_matches!(result, Err(EventhubError::Validation(ref errs)) if errs.len() == 3);
    }

    #[test]
    fn test_validate_update_ignores_absent_fields() {
        assert!(validate_update(&UpdateEventRequest::default()).is_ok());

        let request = UpdateEventRequest {
            max_participants: Some(0),
            ..Default::default()
        };
        assert_matches!(
            validate_update(&request),
            Err(EventhubError::Validation(_))
        );
    }
}
