//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::profile::{Address, Profile};

/// A registered user in the LabHub system.
///
/// Role assignments live in the `user_roles` join table and are loaded
/// separately; they are deliberately not a field here so that permission
/// decisions always read the live assignment state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique, format-validated at the service boundary).
    pub email: String,
    /// Personal information (name, date of birth, sex).
    pub profile: Option<Json<Profile>>,
    /// Latest known address.
    pub address: Option<Json<Address>>,
    /// When the user was registered or imported.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Personal information (optional at registration).
    pub profile: Option<Profile>,
    /// Address (optional at registration).
    pub address: Option<Address>,
}

/// One entry of a bulk administrative import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkImportUser {
    /// Email address to register or look up.
    pub email: String,
    /// Role names the entry carries. Merged onto an existing user's
    /// current set; assigned as-is to a created user.
    pub roles: Vec<String>,
}
