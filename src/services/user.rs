//! User service implementation
//!
//! User account management with admin/self access rules. Passwords are
//! hashed before they reach the repository, and the `is_admin` field of an
//! update payload is silently stripped unless the caller is an admin.

use tracing::{debug, info, warn};

use crate::database::repositories::{NewUser, UserChanges};
use crate::database::DatabaseService;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::services::auth::AuthContext;
use crate::services::policy;
use crate::utils::errors::{EventhubError, Result};
use crate::utils::password::make_password_hash;
use crate::utils::validation::{self, ValidationErrors};

#[derive(Debug, Clone)]
pub struct UserService {
    db: DatabaseService,
}

impl UserService {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a new user account, admin only
    pub async fn create(&self, request: CreateUserRequest, caller: &AuthContext) -> Result<User> {
        policy::require_admin(caller, "user creation")?;
        validate_create(&request)?;

        let new_user = NewUser {
            name: request.name,
            email: request.email,
            password_hash: make_password_hash(&request.password)?,
            phone: request.phone,
            is_admin: request.is_admin.unwrap_or(false),
        };

        let user = self.db.users.create(new_user).await?;
        info!(user_id = user.id, admin_id = caller.user_id, "User created");

        Ok(user)
    }

    /// Get a user profile, owner or admin only
    pub async fn get(&self, user_id: i64, caller: &AuthContext) -> Result<User> {
        policy::require_self_or_admin(caller, user_id, "profile access")?;

        self.db
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(EventhubError::UserNotFound { user_id })
    }

    /// Update a user profile, owner or admin only.
    ///
    /// Non-admin callers cannot touch `is_admin`: the field is dropped from
    /// the payload and the remaining fields still apply.
    pub async fn update(
        &self,
        user_id: i64,
        mut request: UpdateUserRequest,
        caller: &AuthContext,
    ) -> Result<User> {
        policy::require_self_or_admin(caller, user_id, "profile update")?;

        if request.is_admin.is_some() && !policy::can_set_admin_flag(caller) {
            warn!(
                user_id = caller.user_id,
                target_user_id = user_id,
                "Stripping is_admin from non-admin update payload"
            );
            request.is_admin = None;
        }

        validate_update(&request)?;

        // Ensure the target exists before applying COALESCE updates.
        self.db
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(EventhubError::UserNotFound { user_id })?;

        let changes = UserChanges {
            name: request.name,
            email: request.email,
            password_hash: request
                .password
                .as_deref()
                .map(make_password_hash)
                .transpose()?,
            phone: request.phone,
            is_admin: request.is_admin,
        };

        let user = self.db.users.update(user_id, changes).await?;
        info!(user_id = user_id, caller_id = caller.user_id, "User updated");

        Ok(user)
    }

    /// Delete a user account, admin only; self-deletion is always refused
    pub async fn delete(&self, user_id: i64, caller: &AuthContext) -> Result<()> {
        policy::require_admin(caller, "user deletion")?;
        policy::check_self_deletion(caller, user_id)?;

        self.db
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(EventhubError::UserNotFound { user_id })?;

        self.db.users.delete(user_id).await?;
        info!(user_id = user_id, admin_id = caller.user_id, "User deleted");

        Ok(())
    }

    /// List user accounts with pagination, admin only
    pub async fn list(&self, limit: i64, offset: i64, caller: &AuthContext) -> Result<Vec<User>> {
        policy::require_admin(caller, "user listing")?;
        debug!(limit = limit, offset = offset, "Listing users");

        self.db.users.list(limit, offset).await
    }
}

fn validate_create(request: &CreateUserRequest) -> Result<()> {
    let mut errors = ValidationErrors::new();
    validation::require_string(&mut errors, "name", &request.name, 255);
    validation::require_email(&mut errors, "email", &request.email);
    validation::require_password(&mut errors, "password", &request.password);
    validation::optional_string(&mut errors, "phone", request.phone.as_deref(), 20);
    errors.into_result()
}

fn validate_update(request: &UpdateUserRequest) -> Result<()> {
    let mut errors = ValidationErrors::new();
    if let Some(ref name) = request.name {
        validation::require_string(&mut errors, "name", name, 255);
    }
    if let Some(ref email) = request.email {
        validation::require_email(&mut errors, "email", email);
    }
    if let Some(ref password) = request.password {
        validation::require_password(&mut errors, "password", password);
    }
    validation::optional_string(&mut errors, "phone", request.phone.as_deref(), 20);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Anna Kovacs".to_string(),
            email: "anna@example.com".to_string(),
            password: "a strong password".to_string(),
            phone: None,
            is_admin: None,
        }
    }

    #[test]
    fn test_validate_create_accepts_valid_payload() {
        assert!(validate_create(&create_request()).is_ok());
    }

    #[test]
    fn test_validate_create_rejects_bad_fields() {
        let mut request = create_request();
        request.email = "nope".to_string();
        request.password = "short".to_string();

        let result = validate_create(&request);
        assert_matches!(result, Err(EventhubError::Validation(ref errs)) if errs.len() == 2);
    }

    #[test]
    fn test_validate_update_checks_present_fields_only() {
        assert!(validate_update(&UpdateUserRequest::default()).is_ok());

        let request = UpdateUserRequest {
            email: Some("still not an email".to_string()),
            ..Default::default()
        };
        assert_matches!(
            validate_update(&request),
            Err(EventhubError::Validation(_))
        );
    }
}
