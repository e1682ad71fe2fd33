//! Error-to-response mapping
//!
//! Stable status codes and caller-facing messages per error, matching the
//! contract external clients depend on: 422 for validation and admission
//! refusals, 409 for conflicts, 404 for missing state, 403 for policy
//! denials, 500 for everything infrastructural.

use serde::Serialize;

use crate::utils::errors::EventhubError;
use crate::utils::validation::FieldError;

/// Serialized error payload handed to the transport
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl From<&EventhubError> for ErrorResponse {
    fn from(err: &EventhubError) -> Self {
        let (status, message) = match err {
            EventhubError::Validation(_) => (422, "Validation failed".to_string()),
            EventhubError::EventClosed { .. } => {
                (422, "Cannot register for a past event.".to_string())
            }
            EventhubError::EventFull { .. } => (422, "Event is full.".to_string()),
            EventhubError::AlreadyRegistered { .. } => {
                (409, "You are already registered for this event.".to_string())
            }
            EventhubError::DuplicateEmail { .. } => {
                (409, "The email has already been taken.".to_string())
            }
            EventhubError::NotRegistered { .. } => {
                (404, "You are not registered for this event.".to_string())
            }
            EventhubError::EventNotFound { .. } | EventhubError::UserNotFound { .. } => {
                (404, "Not found.".to_string())
            }
            EventhubError::Unauthorized(_) => (403, "Unauthorized".to_string()),
            EventhubError::SelfDeletionForbidden => {
                (403, "You cannot delete yourself.".to_string())
            }
            _ => (500, "Internal server error".to_string()),
        };

        let errors = match err {
            EventhubError::Validation(errs) => Some(errs.clone()),
            _ => None,
        };

        Self {
            status,
            message,
            errors,
        }
    }
}
