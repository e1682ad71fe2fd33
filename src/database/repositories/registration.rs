//! Registration repository implementation
//!
//! Holds the atomic capacity-checked insert used by the admission
//! controller. The UNIQUE (user_id, event_id) index is the authoritative
//! duplicate guard; precondition reads are early exits only.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::event::Event;
use crate::models::registration::{Registration, RegistrationStatus};
use crate::utils::errors::EventhubError;

const REGISTRATION_COLUMNS: &str =
    "id, user_id, event_id, status, registered_at, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically verify capacity and insert a registration.
    ///
    /// Runs in one transaction: the event row is locked with
    /// `SELECT ... FOR UPDATE`, so concurrent requests for the last seat
    /// serialize on the lock and the count can never be observed stale.
    /// Commits the insert or rolls back with `EventFull`; a concurrent
    /// duplicate surfaces as `AlreadyRegistered` via the unique index.
    pub async fn insert_within_capacity(
        &self,
        event_id: i64,
        user_id: i64,
        status: RegistrationStatus,
    ) -> Result<Registration, EventhubError> {
        let mut tx = self.pool.begin().await?;

        let max_participants: (i32,) =
            sqlx::query_as("SELECT max_participants FROM events WHERE id = $1 FOR UPDATE")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(EventhubError::EventNotFound { event_id })?;

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&mut *tx)
                .await?;

        if count.0 >= max_participants.0 as i64 {
            // Rolls back on drop; nothing was written.
            return Err(EventhubError::EventFull { event_id });
        }

        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            INSERT INTO registrations (user_id, event_id, status, registered_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4, $4)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(event_id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_duplicate_registration(e, event_id))?;

        tx.commit().await?;

        Ok(registration)
    }

    /// Find the registration for a (user, event) pair
    pub async fn find_by_user_and_event(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> Result<Option<Registration>, EventhubError> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE user_id = $1 AND event_id = $2"
        ))
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Remove the registration for a (user, event) pair, hard delete
    pub async fn delete_by_user_and_event(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> Result<bool, EventhubError> {
        let result = sqlx::query("DELETE FROM registrations WHERE user_id = $1 AND event_id = $2")
            .bind(user_id)
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get registrations for an event, earliest first
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Registration>, EventhubError> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE event_id = $1 ORDER BY registered_at ASC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    /// Count registrations for an event
    pub async fn count_for_event(&self, event_id: i64) -> Result<i64, EventhubError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// Get events a user holds a registration for, archived ones included
    pub async fn events_for_user(&self, user_id: i64) -> Result<Vec<Event>, EventhubError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.name, e.description, e.date, e.location, e.max_participants,
                   e.archived_at, e.created_at, e.updated_at
            FROM events e
            INNER JOIN registrations r ON e.id = r.event_id
            WHERE r.user_id = $1
            ORDER BY e.date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}

/// Translate the UNIQUE (user_id, event_id) violation into a domain conflict
fn map_duplicate_registration(err: sqlx::Error, event_id: i64) -> EventhubError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.constraint() == Some("registrations_user_id_event_id_key") {
            return EventhubError::AlreadyRegistered { event_id };
        }
    }
    err.into()
}
