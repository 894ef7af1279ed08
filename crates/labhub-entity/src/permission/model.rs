//! Permission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An atomic named capability assignable to roles.
///
/// Immutable once created; `created_by` is recorded for audit only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Unique permission name (acts as the primary key).
    pub name: String,
    /// User who created the permission (None for seeded built-ins).
    pub created_by: Option<Uuid>,
    /// When the permission was created.
    pub created_at: DateTime<Utc>,
}
