//! Granting and revoking delegated-access passes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use labhub_auth::Authentication;
use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_database::repositories::access_pass::AccessPassRepository;
use labhub_database::repositories::user::UserRepository;
use labhub_entity::access_pass::AccessPass;

/// Manages the administrative grant/revoke surface for access passes.
///
/// Read-side decisions (`exists`) belong to the access manager; this
/// service owns the mutations.
#[derive(Debug, Clone)]
pub struct AccessPassService {
    /// Access pass repository.
    passes: Arc<AccessPassRepository>,
    /// User repository (both ends of a pass must exist).
    users: Arc<UserRepository>,
}

impl AccessPassService {
    /// Creates a new access pass service.
    pub fn new(passes: Arc<AccessPassRepository>, users: Arc<UserRepository>) -> Self {
        Self { passes, users }
    }

    /// Grants `actor_user_id` standing access to `subject_user_id`'s
    /// resources.
    ///
    /// The store tolerates duplicate rows, so the grant pre-checks for an
    /// existing pass and returns it instead of inserting another. A
    /// concurrent duplicate slipping through is harmless: existence of any
    /// row is what grants access, and revocation clears them all.
    pub async fn grant(
        &self,
        actor_user_id: Uuid,
        subject_user_id: Uuid,
        granted_by: &Authentication,
    ) -> AppResult<AccessPass> {
        if actor_user_id == subject_user_id {
            return Err(AppError::validation(
                "A user always has access to their own resources",
            ));
        }

        for user_id in [actor_user_id, subject_user_id] {
            if self.users.find_by_id(user_id).await?.is_none() {
                return Err(AppError::not_found("User not found"));
            }
        }

        if let Some(existing) = self.passes.find_for_pair(actor_user_id, subject_user_id).await? {
            return Ok(existing);
        }

        let pass = self.passes.create(actor_user_id, subject_user_id).await?;

        info!(
            granted_by = %granted_by.user_id(),
            actor_id = %pass.actor_user_id,
            subject_id = %pass.subject_user_id,
            "Access pass granted"
        );

        Ok(pass)
    }

    /// Revokes every pass for the (actor, subject) pair, returning how
    /// many were removed.
    pub async fn revoke(
        &self,
        actor_user_id: Uuid,
        subject_user_id: Uuid,
        revoked_by: &Authentication,
    ) -> AppResult<u64> {
        let removed = self
            .passes
            .delete_for_pair(actor_user_id, subject_user_id)
            .await?;

        info!(
            revoked_by = %revoked_by.user_id(),
            actor_id = %actor_user_id,
            subject_id = %subject_user_id,
            removed,
            "Access pass revoked"
        );

        Ok(removed)
    }
}
