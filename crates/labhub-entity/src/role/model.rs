//! Role entity model.
//!
//! A role is a named bundle of permissions. Its identity (the name) is
//! immutable; the granted permission set is administratively editable via
//! the `role_permissions` join table. The effective permission set of a
//! user is always the union over the user's roles, resolved at decision
//! time with a live join rather than cached on the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Baseline role given to every registered user.
pub const USER_ROLE: &str = "USER";
/// Role for medical staff who administer tests and record results.
pub const DOCTOR_ROLE: &str = "DOCTOR";
/// Role holding every built-in permission.
pub const ADMIN_ROLE: &str = "ADMIN";

/// A role in the RBAC system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role name (acts as the primary key).
    pub name: String,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
}

/// A role together with its currently granted permission names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWithPermissions {
    /// Role name.
    pub name: String,
    /// Permission names currently granted to the role.
    pub permissions: Vec<String>,
}
