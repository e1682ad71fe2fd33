//! Authentication collaborator boundary
//!
//! Token issuance and validation live outside this crate. The boundary hands
//! every core operation an explicit `AuthContext` naming the caller; no
//! ambient "current user" lookup exists anywhere below the facade.

use tracing::{debug, warn};

use crate::database::repositories::UserRepository;
use crate::models::user::User;
use crate::utils::errors::{EventhubError, Result};
use crate::utils::password::verify_password;

/// Identity of the acting principal, passed into every core operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
    pub is_admin: bool,
}

impl AuthContext {
    pub fn new(user_id: i64, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }
}

/// Resolves verified caller identities against stored users
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repository: UserRepository,
}

impl AuthService {
    pub fn new(user_repository: UserRepository) -> Self {
        Self { user_repository }
    }

    /// Build the auth context for an already-verified user id
    ///
    /// The transport layer has validated the bearer token by the time this
    /// runs; here we only resolve the id to a live account.
    pub async fn context_for(&self, user_id: i64) -> Result<AuthContext> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(EventhubError::UserNotFound { user_id })?;

        Ok(AuthContext::new(user.id, user.is_admin))
    }

    /// Verify login credentials, returning the matched user
    ///
    /// Token issuance for the verified identity is the transport's job.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        debug!(email = email, "Verifying credentials");

        let user = self.user_repository.find_by_email(email).await?;

        let Some(user) = user else {
            warn!(email = email, "Login attempt for unknown email");
            return Err(EventhubError::Unauthorized(
                "Invalid credentials".to_string(),
            ));
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(EventhubError::Unauthorized(
                "Invalid credentials".to_string(),
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_context_carries_identity() {
        let admin = AuthContext::new(7, true);
        assert_eq!(admin.user_id, 7);
        assert!(admin.is_admin);

        let member = AuthContext::new(42, false);
        assert!(!member.is_admin);
    }
}
