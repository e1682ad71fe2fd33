//! Access policy guard
//!
//! Pure authorization checks over (caller, target, operation). Admins manage
//! events and other users; everyone may view and edit themselves. Nothing in
//! here touches storage.

use crate::services::auth::AuthContext;
use crate::utils::errors::{EventhubError, Result};

/// Event create/update/archive is admin-only
pub fn can_manage_events(caller: &AuthContext) -> bool {
    caller.is_admin
}

/// User create/list/delete is admin-only
pub fn can_manage_users(caller: &AuthContext) -> bool {
    caller.is_admin
}

/// A profile is visible and editable to its owner and to admins
pub fn can_view_or_edit_user(caller: &AuthContext, target_user_id: i64) -> bool {
    caller.is_admin || caller.user_id == target_user_id
}

/// Only admins may grant or revoke the admin flag.
///
/// A non-admin submitting `is_admin` has the field silently stripped from
/// the payload; the rest of the update still applies. This is stripping,
/// not rejection.
pub fn can_set_admin_flag(caller: &AuthContext) -> bool {
    caller.is_admin
}

/// Admins cannot delete their own account
pub fn check_self_deletion(caller: &AuthContext, target_user_id: i64) -> Result<()> {
    if caller.user_id == target_user_id {
        return Err(EventhubError::SelfDeletionForbidden);
    }
    Ok(())
}

/// Require admin rights for an operation
pub fn require_admin(caller: &AuthContext, action: &str) -> Result<()> {
    if !caller.is_admin {
        return Err(EventhubError::Unauthorized(format!(
            "{} requires admin rights",
            action
        )));
    }
    Ok(())
}

/// Require the caller to be the target user or an admin
pub fn require_self_or_admin(
    caller: &AuthContext,
    target_user_id: i64,
    action: &str,
) -> Result<()> {
    if !can_view_or_edit_user(caller, target_user_id) {
        return Err(EventhubError::Unauthorized(format!(
            "{} is limited to the account owner or an admin",
            action
        )));
    }
    Ok(())
}
