//! Test type repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::test_type::{ResultsSchema, TestType};

/// Repository for the test type catalog.
#[derive(Debug, Clone)]
pub struct TestTypeRepository {
    pool: PgPool,
}

impl TestTypeRepository {
    /// Create a new test type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a test type by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TestType>> {
        sqlx::query_as::<_, TestType>("SELECT * FROM test_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find test type", e))
    }

    /// List all test types.
    pub async fn find_all(&self) -> AppResult<Vec<TestType>> {
        sqlx::query_as::<_, TestType>("SELECT * FROM test_types ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list test types", e))
    }

    /// Create a new test type.
    pub async fn create(
        &self,
        name: &str,
        results_schema: &ResultsSchema,
        needed_permission: Option<&str>,
    ) -> AppResult<TestType> {
        sqlx::query_as::<_, TestType>(
            "INSERT INTO test_types (id, name, results_schema, needed_permission) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Json(results_schema))
        .bind(needed_permission)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create test type", e))
    }
}
