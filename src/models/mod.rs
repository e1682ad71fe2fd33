//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod registration;
pub mod user;

// Re-export commonly used models
pub use event::{CreateEventRequest, Event, EventLifecycle, UpdateEventRequest};
pub use registration::{Registration, RegistrationStatus};
pub use user::{CreateUserRequest, UpdateUserRequest, User};
