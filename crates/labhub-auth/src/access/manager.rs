//! The access manager decides whether the acting user may touch a
//! target user's resources.
//!
//! Resolution order:
//! 1. Self check: a user always reaches their own resources. Pure and
//!    free, so it runs first.
//! 2. Access pass: one store round-trip, only taken when the self check
//!    fails.
//!
//! Denial is the value `false`, never an error: the HTTP layer owns the
//! translation to a status code (404 in the user-scoped routes, so that a
//! denied caller cannot distinguish "no such user" from "not yours").
//! Collapsing both grant reasons into one boolean also keeps callers from
//! learning *why* access was granted.
//!
//! The manager is resource-agnostic: callers establish ownership (e.g. a
//! test's `user_id`) and ask about the owning user.

use std::sync::Arc;

use uuid::Uuid;

use labhub_core::result::AppResult;
use labhub_database::repositories::access_pass::AccessPassRepository;

use crate::context::Authentication;

/// Builds per-request [`AccessManager`]s bound to one authentication
/// context.
#[derive(Debug, Clone)]
pub struct AccessManagerFactory {
    /// Access pass repository.
    passes: Arc<AccessPassRepository>,
}

impl AccessManagerFactory {
    /// Creates a new factory.
    pub fn new(passes: Arc<AccessPassRepository>) -> Self {
        Self { passes }
    }

    /// Binds the factory to one request's authentication context.
    pub fn for_authentication(&self, auth: &Authentication) -> AccessManager {
        AccessManager {
            actor_user_id: auth.user_id(),
            passes: Arc::clone(&self.passes),
        }
    }
}

/// Per-request decision engine resolving user-resource access.
#[derive(Debug, Clone)]
pub struct AccessManager {
    /// The acting user this manager is bound to.
    actor_user_id: Uuid,
    /// Access pass repository.
    passes: Arc<AccessPassRepository>,
}

impl AccessManager {
    /// True iff the acting user *is* the target user. Pure, no I/O.
    pub fn is_logged_in_as_user(&self, target_user_id: Uuid) -> bool {
        self.actor_user_id == target_user_id
    }

    /// True iff the acting user holds at least one pass onto the target.
    pub async fn has_access_pass_for_user(&self, target_user_id: Uuid) -> AppResult<bool> {
        self.passes.exists(self.actor_user_id, target_user_id).await
    }

    /// The access decision: self-access OR a delegated pass.
    pub async fn can_access_user(&self, target_user_id: Uuid) -> AppResult<bool> {
        if self.is_logged_in_as_user(target_user_id) {
            return Ok(true);
        }
        self.has_access_pass_for_user(target_user_id).await
    }
}
