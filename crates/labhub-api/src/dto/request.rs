//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use labhub_entity::user::{Address, Profile};

/// PATCH /users/{id} body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserBody {
    /// New personal information, if changing.
    pub profile: Option<Profile>,
    /// New address, if changing.
    pub address: Option<Address>,
}

/// POST /users body (bulk import).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateUsersBody {
    /// Entries to import.
    pub users: Vec<BulkCreateUserBody>,
}

/// One entry in a bulk import body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateUserBody {
    /// Email address.
    pub email: String,
    /// Roles the entry carries; an omitted or empty list means the
    /// baseline USER role.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// POST /users/{id}/roles body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRoleBody {
    /// Role name to assign.
    pub name: String,
}

/// POST /users/{id}/tests body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTestBody {
    /// The kind of test administered.
    pub test_type_id: Uuid,
    /// Results recorded at creation time, if any.
    pub results: Option<CreateTestResultsBody>,
}

/// Results payload within a test create body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTestResultsBody {
    /// Raw details, validated against the test type's schema.
    pub details: Value,
}

/// POST /permissions and POST /roles body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCatalogEntryBody {
    /// Entry name.
    pub name: String,
}

/// POST /roles/{name}/permissions body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignPermissionBody {
    /// Permission name to grant to the role.
    pub name: String,
}

/// POST /users/{id}/access-passes body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantAccessPassBody {
    /// The user who will be able to act on the subject's resources.
    pub actor_user_id: Uuid,
}

/// DELETE /users/{id}/access-passes query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeAccessPassParams {
    /// The actor whose passes onto the subject are revoked.
    pub actor_user_id: Uuid,
}
