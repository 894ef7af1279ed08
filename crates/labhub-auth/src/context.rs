//! Authentication context carrying the verified actor of a request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use labhub_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer after token verification, with the user and
/// role names loaded fresh from the store so that every decision sees the
/// live assignment state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authentication {
    /// The authenticated user.
    pub user: User,
    /// Role names assigned to the user at request time.
    pub roles: Vec<String>,
}

impl Authentication {
    /// Create a new authentication context.
    pub fn new(user: User, roles: Vec<String>) -> Self {
        Self { user, roles }
    }

    /// The acting user's id.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}
