//! Password hashing utilities
//!
//! Argon2 hashing for credentials at rest. Plaintext passwords only exist
//! inside request payloads and are hashed before they reach a repository.

use argon2::Argon2;
use password_hash::{PasswordHash, SaltString};

use crate::utils::errors::Result;

/// Hash a plaintext password for storage
pub fn make_password_hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(rand::thread_rng());
    let hash = PasswordHash::generate(Argon2::default(), password, &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)?;
    match parsed.verify_password(&[&Argon2::default()], password) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
