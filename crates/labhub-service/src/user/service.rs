//! User profile updates and bulk administrative import.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

use labhub_auth::Authentication;
use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_database::repositories::role::RoleRepository;
use labhub_database::repositories::user::UserRepository;
use labhub_entity::role::model::USER_ROLE;
use labhub_entity::user::model::BulkImportUser;
use labhub_entity::user::{Address, Profile, User};

/// Request to update a user's profile and/or address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New personal information, if changing.
    pub profile: Option<Profile>,
    /// New address, if changing.
    pub address: Option<Address>,
}

/// Outcome of a bulk import, split by whether the email was new.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateOutcome {
    /// Users created by this import.
    pub created: Vec<User>,
    /// Already-registered users whose role set was extended.
    pub updated: Vec<User>,
}

/// Manages user records.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Role repository (baseline role assignment on import).
    roles: Arc<RoleRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>, roles: Arc<RoleRepository>) -> Self {
        Self { users, roles }
    }

    /// Fetches a user by id.
    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates profile and/or address of an existing user.
    pub async fn update_user(&self, id: Uuid, req: UpdateUserRequest) -> AppResult<User> {
        // Existence first, so a missing user is NotFound rather than a
        // zero-row update surfacing as a database error.
        let existing = self.get_user(id).await?;

        self.users
            .update_profile(existing.id, req.profile.as_ref(), req.address.as_ref())
            .await
    }

    /// Imports users from `{email, roles}` entries. An already-registered
    /// email is not an error: the entry's roles are merged onto the
    /// existing user's set. An entry without roles gets the baseline USER
    /// role, so a plain email list stays a valid import. The whole batch
    /// lands in one store transaction.
    pub async fn bulk_create(
        &self,
        entries: &[BulkImportUser],
        actor: &Authentication,
    ) -> AppResult<BulkCreateOutcome> {
        let mut normalized = Vec::with_capacity(entries.len());
        for entry in entries {
            if !entry.email.validate_email() {
                return Err(AppError::validation(format!(
                    "Invalid email '{}'",
                    entry.email
                )));
            }

            let roles = if entry.roles.is_empty() {
                vec![USER_ROLE.to_string()]
            } else {
                entry.roles.clone()
            };
            for role in &roles {
                if self.roles.find_by_name(role).await?.is_none() {
                    return Err(AppError::validation(format!("Unknown role '{role}'")));
                }
            }

            normalized.push(BulkImportUser {
                email: entry.email.clone(),
                roles,
            });
        }

        let rows = self.users.bulk_import(&normalized, actor.user_id()).await?;

        info!(
            actor_id = %actor.user_id(),
            created = rows.created.len(),
            updated = rows.updated.len(),
            "Bulk user import finished"
        );

        Ok(BulkCreateOutcome {
            created: rows.created,
            updated: rows.updated,
        })
    }
}
