//! Services module
//!
//! This module contains business logic services

pub mod admission;
pub mod auth;
pub mod event;
pub mod policy;
pub mod user;

// Re-export commonly used services
pub use admission::AdmissionController;
pub use auth::{AuthContext, AuthService};
pub use event::EventService;
pub use user::UserService;

use crate::config::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub admission: AdmissionController,
    pub auth: AuthService,
    pub events: EventService,
    pub users: UserService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(db: DatabaseService, settings: &Settings) -> Self {
        let admission = AdmissionController::new(db.clone(), settings.registration.clone());
        let auth = AuthService::new(db.users.clone());
        let events = EventService::new(db.clone());
        let users = UserService::new(db);

        Self {
            admission,
            auth,
            events,
            users,
        }
    }
}
