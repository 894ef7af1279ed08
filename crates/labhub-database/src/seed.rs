//! Baseline role and permission seeding.
//!
//! Runs after migrations on every startup. All statements are idempotent
//! (`ON CONFLICT DO NOTHING`) so repeated boots leave the catalog as-is,
//! including permissions that administrators created at runtime.

use sqlx::PgPool;
use tracing::info;

use labhub_core::error::{AppError, ErrorKind};
use labhub_entity::permission::names;
use labhub_entity::role::model::{ADMIN_ROLE, DOCTOR_ROLE, USER_ROLE};

/// Seed baseline roles and built-in permissions, granting every built-in
/// permission to the ADMIN role.
pub async fn seed_baseline(pool: &PgPool) -> Result<(), AppError> {
    for role in [USER_ROLE, DOCTOR_ROLE, ADMIN_ROLE] {
        sqlx::query("INSERT INTO roles (name) VALUES ($1) ON CONFLICT DO NOTHING")
            .bind(role)
            .execute(pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed role", e))?;
    }

    for permission in names::BUILT_IN {
        sqlx::query("INSERT INTO permissions (name) VALUES ($1) ON CONFLICT DO NOTHING")
            .bind(permission)
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to seed permission", e)
            })?;

        sqlx::query(
            "INSERT INTO role_permissions (role_name, permission_name) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(ADMIN_ROLE)
        .bind(permission)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to grant permission to ADMIN", e)
        })?;
    }

    info!("Baseline roles and permissions seeded");
    Ok(())
}
