//! Access pass entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A delegated-access grant letting one user act on another user's
/// protected resources.
///
/// A pass is a standing grant: the schema carries no expiry column, and a
/// pass stays effective until revoked by deletion. The table allows
/// multiple rows for the same (actor, subject) pair; existence of at least
/// one row is what grants access.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessPass {
    /// Unique pass identifier.
    pub id: Uuid,
    /// The user being granted access.
    pub actor_user_id: Uuid,
    /// The user whose resources are opened up.
    pub subject_user_id: Uuid,
    /// When the pass was granted.
    pub created_at: DateTime<Utc>,
}
