//! Registry management: create/list permissions and roles, wire
//! assignment relations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use labhub_auth::Authentication;
use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_database::repositories::permission::PermissionRepository;
use labhub_database::repositories::role::RoleRepository;
use labhub_database::repositories::user::UserRepository;
use labhub_entity::permission::Permission;
use labhub_entity::role::model::RoleWithPermissions;
use labhub_entity::role::Role;

/// Manages the permission and role catalogs.
#[derive(Debug, Clone)]
pub struct PermissionService {
    /// Permission catalog repository.
    permissions: Arc<PermissionRepository>,
    /// Role and assignment repository.
    roles: Arc<RoleRepository>,
    /// User repository (existence checks for role assignment).
    users: Arc<UserRepository>,
}

impl PermissionService {
    /// Creates a new permission service.
    pub fn new(
        permissions: Arc<PermissionRepository>,
        roles: Arc<RoleRepository>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            permissions,
            roles,
            users,
        }
    }

    /// Lists all known permissions. No side effects.
    pub async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.permissions.find_all().await
    }

    /// Creates a new permission, recording the actor as creator.
    ///
    /// Empty and duplicate names are validation failures; no row is
    /// written in either case.
    pub async fn create_permission(
        &self,
        name: &str,
        actor: &Authentication,
    ) -> AppResult<Permission> {
        let name = valid_catalog_name(name)?;

        if self.permissions.find_by_name(name).await?.is_some() {
            return Err(AppError::validation(format!(
                "Permission '{name}' already exists"
            )));
        }

        let permission = self.permissions.create(name, actor.user_id()).await?;

        info!(
            actor_id = %actor.user_id(),
            permission = %permission.name,
            "Permission created"
        );

        Ok(permission)
    }

    /// Grants a permission to a role. Both sides must exist; re-granting
    /// is a no-op success.
    pub async fn assign_permission_to_role(
        &self,
        permission_name: &str,
        role_name: &str,
        actor: &Authentication,
    ) -> AppResult<RoleWithPermissions> {
        let permission = self
            .permissions
            .find_by_name(permission_name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Permission '{permission_name}' not found")))?;
        let role = self
            .roles
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role '{role_name}' not found")))?;

        self.roles
            .assign_permission(&role.name, &permission.name, actor.user_id())
            .await?;

        info!(
            actor_id = %actor.user_id(),
            role = %role.name,
            permission = %permission.name,
            "Permission assigned to role"
        );

        let permissions = self.roles.permissions_for_role(&role.name).await?;
        Ok(RoleWithPermissions {
            name: role.name,
            permissions,
        })
    }

    /// Lists all roles with their current permission sets.
    pub async fn list_roles(&self) -> AppResult<Vec<RoleWithPermissions>> {
        let roles = self.roles.find_all().await?;
        let mut out = Vec::with_capacity(roles.len());
        for role in roles {
            let permissions = self.roles.permissions_for_role(&role.name).await?;
            out.push(RoleWithPermissions {
                name: role.name,
                permissions,
            });
        }
        Ok(out)
    }

    /// Creates a new role. Same name rules as permissions.
    pub async fn create_role(&self, name: &str, actor: &Authentication) -> AppResult<Role> {
        let name = valid_catalog_name(name)?;

        if self.roles.find_by_name(name).await?.is_some() {
            return Err(AppError::validation(format!("Role '{name}' already exists")));
        }

        let role = self.roles.create(name).await?;

        info!(actor_id = %actor.user_id(), role = %role.name, "Role created");

        Ok(role)
    }

    /// Assigns a role to a user. Both must exist; re-assigning is a
    /// no-op success.
    pub async fn assign_role_to_user(
        &self,
        role_name: &str,
        user_id: Uuid,
        actor: &Authentication,
    ) -> AppResult<()> {
        let role = self
            .roles
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role '{role_name}' not found")))?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.roles
            .assign_to_user(user.id, &role.name, actor.user_id())
            .await?;

        info!(
            actor_id = %actor.user_id(),
            user_id = %user.id,
            role = %role.name,
            "Role assigned to user"
        );

        Ok(())
    }
}

/// Trimmed, non-empty catalog name or a validation error.
fn valid_catalog_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    Ok(name)
}
