//! Registration admission controller
//!
//! Decides whether a registration request is admitted and performs the
//! state transition. Per (user, event) pair the states are Unregistered and
//! Registered; `register` moves forward, `unregister` and the admin removal
//! move back. Checks run in a fixed order and the first failure wins:
//! event exists, event not in the past, capacity available, no duplicate.
//!
//! Capacity and duplicate enforcement happen inside one database
//! transaction (`RegistrationRepository::insert_within_capacity`), so the
//! participant count can never exceed `max_participants` under concurrent
//! requests and no error leaves partial state behind.

use chrono::Utc;
use tracing::{debug, info};

use crate::config::RegistrationConfig;
use crate::database::DatabaseService;
use crate::models::registration::{Registration, RegistrationStatus};
use crate::services::auth::AuthContext;
use crate::services::policy;
use crate::utils::errors::{EventhubError, Result};

#[derive(Debug, Clone)]
pub struct AdmissionController {
    db: DatabaseService,
    config: RegistrationConfig,
}

impl AdmissionController {
    pub fn new(db: DatabaseService, config: RegistrationConfig) -> Self {
        Self { db, config }
    }

    fn initial_status(&self) -> RegistrationStatus {
        if self.config.immediate_accept {
            RegistrationStatus::Accepted
        } else {
            RegistrationStatus::Pending
        }
    }

    /// Register the caller for an event.
    ///
    /// Archived events are only valid targets when
    /// `allow_archived_registration` is set; otherwise they look absent.
    /// The capacity check and the insert are a single transaction, and the
    /// UNIQUE (user_id, event_id) index is the authoritative duplicate
    /// guard, so two concurrent requests can never overbook or double-book.
    pub async fn register(&self, event_id: i64, caller: &AuthContext) -> Result<Registration> {
        debug!(event_id = event_id, user_id = caller.user_id, "Admission requested");

        let event = self
            .db
            .events
            .find_by_id(event_id, self.config.allow_archived_registration)
            .await?
            .ok_or(EventhubError::EventNotFound { event_id })?;

        if event.is_closed(Utc::now()) {
            debug!(event_id = event_id, user_id = caller.user_id, "Event date is past");
            return Err(EventhubError::EventClosed { event_id });
        }

        let registration = self
            .db
            .registrations
            .insert_within_capacity(event_id, caller.user_id, self.initial_status())
            .await?;

        info!(
            event_id = event_id,
            user_id = caller.user_id,
            registration_id = registration.id,
            status = registration.status.as_str(),
            "Registration admitted"
        );

        Ok(registration)
    }

    /// Unregister the caller from an event.
    ///
    /// Archived events stay valid targets for removal.
    pub async fn unregister(&self, event_id: i64, caller: &AuthContext) -> Result<()> {
        self.remove_registration(event_id, caller.user_id).await?;

        info!(event_id = event_id, user_id = caller.user_id, "Registration removed");
        Ok(())
    }

    /// Remove another user's registration, admin only.
    pub async fn admin_remove_user(
        &self,
        event_id: i64,
        target_user_id: i64,
        caller: &AuthContext,
    ) -> Result<()> {
        policy::require_admin(caller, "removing another user's registration")?;

        self.remove_registration(event_id, target_user_id).await?;

        crate::utils::logging::log_admin_action(
            caller.user_id,
            "remove_registration",
            Some(&format!("user:{}", target_user_id)),
            Some(&format!("event:{}", event_id)),
        );
        Ok(())
    }

    async fn remove_registration(&self, event_id: i64, user_id: i64) -> Result<()> {
        // Archived events must remain reachable here, hence include_archived.
        self.db
            .events
            .find_by_id(event_id, true)
            .await?
            .ok_or(EventhubError::EventNotFound { event_id })?;

        let deleted = self
            .db
            .registrations
            .delete_by_user_and_event(user_id, event_id)
            .await?;

        if !deleted {
            return Err(EventhubError::NotRegistered { event_id });
        }

        Ok(())
    }
}
