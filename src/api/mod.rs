//! Request facade
//!
//! Transport-neutral boundary between external callers and the core. Each
//! operation takes an explicit `AuthContext` for the acting principal and
//! returns domain results; `ErrorResponse` maps every error to the stable
//! status and message a transport layer serializes.

mod response;

pub use response::ErrorResponse;

use crate::database::{DatabaseService, EventFilter};
use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::models::registration::Registration;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::services::{AuthContext, ServiceFactory};
use crate::utils::errors::Result;

/// Default page size for listing operations
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// An event together with its registrations, for detail views
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub registrations: Vec<Registration>,
}

/// A user together with the events they are registered for
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    pub events: Vec<Event>,
}

/// The facade over all core operations
#[derive(Debug, Clone)]
pub struct EventhubApi {
    services: ServiceFactory,
    db: DatabaseService,
}

impl EventhubApi {
    pub fn new(services: ServiceFactory, db: DatabaseService) -> Self {
        Self { services, db }
    }

    /// Resolve a verified user id into an auth context
    pub async fn context_for(&self, user_id: i64) -> Result<AuthContext> {
        self.services.auth.context_for(user_id).await
    }

    /// Verify login credentials; token issuance happens upstream
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.services.auth.authenticate(email, password).await
    }

    // --- Registrations ---

    pub async fn register_for_event(
        &self,
        event_id: i64,
        caller: &AuthContext,
    ) -> Result<Registration> {
        self.services.admission.register(event_id, caller).await
    }

    pub async fn unregister_from_event(&self, event_id: i64, caller: &AuthContext) -> Result<()> {
        self.services.admission.unregister(event_id, caller).await
    }

    pub async fn admin_remove_registration(
        &self,
        event_id: i64,
        target_user_id: i64,
        caller: &AuthContext,
    ) -> Result<()> {
        self.services
            .admission
            .admin_remove_user(event_id, target_user_id, caller)
            .await
    }

    // --- Events ---

    pub async fn create_event(
        &self,
        request: CreateEventRequest,
        caller: &AuthContext,
    ) -> Result<Event> {
        self.services.events.create(request, caller).await
    }

    pub async fn update_event(
        &self,
        event_id: i64,
        request: UpdateEventRequest,
        caller: &AuthContext,
    ) -> Result<Event> {
        self.services.events.update(event_id, request, caller).await
    }

    pub async fn delete_event(&self, event_id: i64, caller: &AuthContext) -> Result<()> {
        self.services.events.archive(event_id, caller).await
    }

    /// Event detail view with its registrations
    pub async fn show_event(&self, event_id: i64) -> Result<EventDetails> {
        let event = self.services.events.get(event_id, false).await?;
        let registrations = self.db.registrations.list_for_event(event_id).await?;
        Ok(EventDetails {
            event,
            registrations,
        })
    }

    pub async fn list_events(&self, page: i64) -> Result<Vec<Event>> {
        self.services
            .events
            .list(DEFAULT_PAGE_SIZE, page_offset(page))
            .await
    }

    pub async fn upcoming_events(&self, page: i64) -> Result<Vec<Event>> {
        self.services
            .events
            .upcoming(DEFAULT_PAGE_SIZE, page_offset(page))
            .await
    }

    pub async fn past_events(&self, page: i64) -> Result<Vec<Event>> {
        self.services
            .events
            .past(DEFAULT_PAGE_SIZE, page_offset(page))
            .await
    }

    pub async fn filter_events(&self, filter: EventFilter, page: i64) -> Result<Vec<Event>> {
        self.services
            .events
            .filter(filter, DEFAULT_PAGE_SIZE, page_offset(page))
            .await
    }

    // --- Users ---

    pub async fn create_user(
        &self,
        request: CreateUserRequest,
        caller: &AuthContext,
    ) -> Result<User> {
        self.services.users.create(request, caller).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
        caller: &AuthContext,
    ) -> Result<User> {
        self.services.users.update(user_id, request, caller).await
    }

    pub async fn delete_user(&self, user_id: i64, caller: &AuthContext) -> Result<()> {
        self.services.users.delete(user_id, caller).await
    }

    /// Profile view with the user's registered events
    pub async fn show_user(&self, user_id: i64, caller: &AuthContext) -> Result<UserDetails> {
        let user = self.services.users.get(user_id, caller).await?;
        let events = self.db.registrations.events_for_user(user_id).await?;
        Ok(UserDetails { user, events })
    }

    pub async fn list_users(&self, page: i64, caller: &AuthContext) -> Result<Vec<User>> {
        self.services
            .users
            .list(DEFAULT_PAGE_SIZE, page_offset(page), caller)
            .await
    }

    /// The caller's own profile with registered events
    pub async fn me(&self, caller: &AuthContext) -> Result<UserDetails> {
        self.show_user(caller.user_id, caller).await
    }

    /// Update the caller's own profile
    pub async fn update_me(
        &self,
        request: UpdateUserRequest,
        caller: &AuthContext,
    ) -> Result<User> {
        self.update_user(caller.user_id, request, caller).await
    }
}

fn page_offset(page: i64) -> i64 {
    (page.max(1) - 1) * DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset_is_one_based() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), DEFAULT_PAGE_SIZE);
        assert_eq!(page_offset(0), 0);
        assert_eq!(page_offset(-3), 0);
    }
}
