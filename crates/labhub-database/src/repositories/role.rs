//! Role repository implementation.
//!
//! Also owns the role↔permission and user↔role assignment relations and
//! the live permission-union query that every authorization decision runs.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::role::Role;

/// Repository for roles and their assignment relations.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a role by name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role", e))
    }

    /// List all roles.
    pub async fn find_all(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))
    }

    /// Create a new role.
    pub async fn create(&self, name: &str) -> AppResult<Role> {
        sqlx::query_as::<_, Role>("INSERT INTO roles (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create role", e))
    }

    /// Permission names currently granted to a role.
    pub async fn permissions_for_role(&self, role_name: &str) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT permission_name FROM role_permissions WHERE role_name = $1 \
             ORDER BY permission_name",
        )
        .bind(role_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list role permissions", e)
        })
    }

    /// Grant a permission to a role. Idempotent: re-granting an already
    /// granted permission is a no-op success.
    pub async fn assign_permission(
        &self,
        role_name: &str,
        permission_name: &str,
        assigned_by: Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO role_permissions (role_name, permission_name, assigned_by) \
             VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        )
        .bind(role_name)
        .bind(permission_name)
        .bind(assigned_by)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to assign permission to role", e)
        })?;
        Ok(())
    }

    /// Role names currently assigned to a user.
    pub async fn roles_for_user(&self, user_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT role_name FROM user_roles WHERE user_id = $1 ORDER BY role_name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user roles", e))
    }

    /// Assign a role to a user. Idempotent like `assign_permission`.
    pub async fn assign_to_user(
        &self,
        user_id: Uuid,
        role_name: &str,
        assigned_by: Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role_name, assigned_by) \
             VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(role_name)
        .bind(assigned_by)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to assign role to user", e)
        })?;
        Ok(())
    }

    /// Whether the user's current role set reaches the permission.
    ///
    /// One EXISTS over the live join, so a permission granted to a role a
    /// moment ago is visible to the very next decision without re-reading
    /// the user.
    pub async fn user_has_permission(
        &self,
        user_id: Uuid,
        permission_name: &str,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS( \
               SELECT 1 FROM user_roles ur \
               JOIN role_permissions rp ON rp.role_name = ur.role_name \
               WHERE ur.user_id = $1 AND rp.permission_name = $2)",
        )
        .bind(user_id)
        .bind(permission_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check user permission", e)
        })
    }
}
