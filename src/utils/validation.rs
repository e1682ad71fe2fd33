//! Field-level input validation
//!
//! Each operation validates its payload explicitly and collects structured
//! per-field errors instead of failing on the first problem.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{EventhubError, Result};

/// A single validation failure attached to a named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Accumulates field errors for one request payload
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finish validation, converting accumulated errors into a failure
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EventhubError::Validation(self.errors))
        }
    }
}

/// Check that a required string is present and within a length bound
pub fn require_string(errors: &mut ValidationErrors, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
    } else if value.len() > max_len {
        errors.push(field, &format!("must be at most {} characters", max_len));
    }
}

/// Check an optional string against a length bound
pub fn optional_string(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    max_len: usize,
) {
    if let Some(v) = value {
        if v.len() > max_len {
            errors.push(field, &format!("must be at most {} characters", max_len));
        }
    }
}

/// Minimal structural email check, uniqueness is enforced by the store
pub fn require_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
        return;
    }
    let valid = value.len() <= 255
        && value.split('@').count() == 2
        && value.split('@').all(|part| !part.is_empty())
        && value.rsplit('@').next().map(|d| d.contains('.')).unwrap_or(false);
    if !valid {
        errors.push(field, "must be a valid email address");
    }
}

/// Password strength floor for create/update payloads
pub fn require_password(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.len() < 8 {
        errors.push(field, "must be at least 8 characters");
    }
}
