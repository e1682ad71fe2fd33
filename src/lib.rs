//! Eventhub registration backend
//!
//! Event-registration backend: admins create events with capacity limits,
//! users register and unregister, and capacity is enforced transactionally
//! so concurrent requests can never overbook an event. This library exposes
//! the admission controller, policy guard, entity store and request facade;
//! transports mount on top of the facade.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventhubError, Result};

// Re-export main components for easy access
pub use api::EventhubApi;
pub use database::DatabaseService;
pub use services::{AuthContext, ServiceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
