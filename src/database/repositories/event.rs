//! Event repository implementation
//!
//! Events are soft-deleted: `archive` stamps `archived_at` and listing
//! queries must explicitly opt in to archived rows.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::utils::errors::EventhubError;

const EVENT_COLUMNS: &str =
    "id, name, description, date, location, max_participants, archived_at, created_at, updated_at";

/// Date-range and location filter for event listing
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, EventhubError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (name, description, date, location, max_participants, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.description)
        .bind(request.date)
        .bind(request.location)
        .bind(request.max_participants)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID, archived rows stay reachable on request
    pub async fn find_by_id(
        &self,
        id: i64,
        include_archived: bool,
    ) -> Result<Option<Event>, EventhubError> {
        let sql = if include_archived {
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1")
        } else {
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 AND archived_at IS NULL")
        };

        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Apply a partial update, absent fields keep their stored values
    pub async fn update(
        &self,
        id: i64,
        request: UpdateEventRequest,
    ) -> Result<Option<Event>, EventhubError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                location = COALESCE($5, location),
                max_participants = COALESCE($6, max_participants),
                updated_at = $7
            WHERE id = $1 AND archived_at IS NULL
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.date)
        .bind(request.location)
        .bind(request.max_participants)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Archive event (soft delete), registrations are kept
    pub async fn archive(&self, id: i64) -> Result<bool, EventhubError> {
        let result = sqlx::query(
            "UPDATE events SET archived_at = $2, updated_at = $2 WHERE id = $1 AND archived_at IS NULL",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List active events with pagination, newest date first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Event>, EventhubError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE archived_at IS NULL ORDER BY date DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Get upcoming active events, soonest first
    pub async fn upcoming(&self, limit: i64, offset: i64) -> Result<Vec<Event>, EventhubError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE archived_at IS NULL AND date >= NOW() ORDER BY date ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Get past active events, most recent first
    pub async fn past(&self, limit: i64, offset: i64) -> Result<Vec<Event>, EventhubError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE archived_at IS NULL AND date < NOW() ORDER BY date DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Filter active events by date range and location substring
    pub async fn filter(
        &self,
        filter: EventFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, EventhubError> {
        let location_pattern = filter
            .location
            .map(|l| format!("%{}%", l.replace('%', "\\%").replace('_', "\\_")));

        let events = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {EVENT_COLUMNS} FROM events
            WHERE archived_at IS NULL
              AND ($1::timestamptz IS NULL OR date >= $1)
              AND ($2::timestamptz IS NULL OR date <= $2)
              AND ($3::text IS NULL OR location ILIKE $3)
            ORDER BY date DESC LIMIT $4 OFFSET $5
            "#
        ))
        .bind(filter.date_from)
        .bind(filter.date_to)
        .bind(location_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Count active events
    pub async fn count(&self) -> Result<i64, EventhubError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM events WHERE archived_at IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}
