//! Access pass repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::access_pass::AccessPass;

/// Repository for delegated-access passes.
#[derive(Debug, Clone)]
pub struct AccessPassRepository {
    pool: PgPool,
}

impl AccessPassRepository {
    /// Create a new access pass repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new pass row. The schema permits duplicates for the same
    /// pair; callers wanting at-most-one should check `exists` first.
    pub async fn create(&self, actor_user_id: Uuid, subject_user_id: Uuid) -> AppResult<AccessPass> {
        sqlx::query_as::<_, AccessPass>(
            "INSERT INTO access_passes (id, actor_user_id, subject_user_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(actor_user_id)
        .bind(subject_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create access pass", e))
    }

    /// Return the oldest pass for the (actor, subject) pair, if any.
    pub async fn find_for_pair(
        &self,
        actor_user_id: Uuid,
        subject_user_id: Uuid,
    ) -> AppResult<Option<AccessPass>> {
        sqlx::query_as::<_, AccessPass>(
            "SELECT * FROM access_passes \
             WHERE actor_user_id = $1 AND subject_user_id = $2 \
             ORDER BY created_at ASC LIMIT 1",
        )
        .bind(actor_user_id)
        .bind(subject_user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find access pass", e))
    }

    /// Whether at least one pass exists for the (actor, subject) pair.
    pub async fn exists(&self, actor_user_id: Uuid, subject_user_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS( \
               SELECT 1 FROM access_passes \
               WHERE actor_user_id = $1 AND subject_user_id = $2)",
        )
        .bind(actor_user_id)
        .bind(subject_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check access pass", e))
    }

    /// Delete every pass for the (actor, subject) pair, returning how many
    /// rows were removed. Duplicates are tolerated on grant, so revocation
    /// must clear them all to actually withdraw access.
    pub async fn delete_for_pair(
        &self,
        actor_user_id: Uuid,
        subject_user_id: Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM access_passes WHERE actor_user_id = $1 AND subject_user_id = $2",
        )
        .bind(actor_user_id)
        .bind(subject_user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke access pass", e))?;
        Ok(result.rows_affected())
    }
}
