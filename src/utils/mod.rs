//! Utility modules
//!
//! Shared error types, logging setup, validation and password helpers

pub mod errors;
pub mod logging;
pub mod password;
pub mod validation;

pub use errors::{EventhubError, Result};
pub use validation::{FieldError, ValidationErrors};
