//! Permission checking against the live role→permission relation.

use std::sync::Arc;

use uuid::Uuid;

use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_database::repositories::role::RoleRepository;

/// Checks whether a user holds a named permission through any of their
/// currently assigned roles.
///
/// Every check runs the union join against the store. Nothing is cached
/// across requests: a role edit is visible to the very next decision.
#[derive(Debug, Clone)]
pub struct PermissionChecker {
    /// Role/assignment repository.
    roles: Arc<RoleRepository>,
}

impl PermissionChecker {
    /// Creates a new permission checker.
    pub fn new(roles: Arc<RoleRepository>) -> Self {
        Self { roles }
    }

    /// True iff `permission_name` is in the union of permissions of the
    /// user's roles.
    pub async fn user_has_permission(
        &self,
        user_id: Uuid,
        permission_name: &str,
    ) -> AppResult<bool> {
        self.roles.user_has_permission(user_id, permission_name).await
    }

    /// Checks the permission and returns `Err(Forbidden)` when absent.
    ///
    /// Convenience for permission-gated actions where denial is an error,
    /// unlike user-scoped access where denial is a value.
    pub async fn require_permission(
        &self,
        user_id: Uuid,
        permission_name: &str,
    ) -> AppResult<()> {
        if self.user_has_permission(user_id, permission_name).await? {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Permission '{permission_name}' required"
            )))
        }
    }
}
