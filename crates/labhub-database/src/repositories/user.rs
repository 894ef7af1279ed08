//! User repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::user::model::{BulkImportUser, CreateUser};
use labhub_entity::user::{Address, Profile, User};

/// Rows touched by a bulk import, split by whether the email already
/// belonged to a user.
#[derive(Debug, Clone)]
pub struct BulkImportRows {
    /// Users created by the import.
    pub created: Vec<User>,
    /// Existing users whose role set was extended.
    pub updated: Vec<User>,
}

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, profile, address) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(data.profile.as_ref().map(Json))
        .bind(data.address.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    /// Import users and their role assignments in one transaction.
    ///
    /// An email that already belongs to a user gets the entry's roles
    /// added to its current set instead of a new row. Any failure rolls
    /// the whole import back, so a partial batch never lands. Writes to
    /// `user_roles` stay here rather than going through the role
    /// repository so they share the transaction.
    pub async fn bulk_import(
        &self,
        entries: &[BulkImportUser],
        assigned_by: Uuid,
    ) -> AppResult<BulkImportRows> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start import transaction", e)
        })?;

        let mut created = Vec::new();
        let mut updated = Vec::new();

        for entry in entries {
            let existing = sqlx::query_as::<_, User>(
                "SELECT * FROM users WHERE LOWER(email) = LOWER($1)",
            )
            .bind(&entry.email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })?;

            let (user, existed) = match existing {
                Some(user) => (user, true),
                None => {
                    let user = sqlx::query_as::<_, User>(
                        "INSERT INTO users (id, email) VALUES ($1, $2) RETURNING *",
                    )
                    .bind(Uuid::new_v4())
                    .bind(&entry.email)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to create user", e)
                    })?;
                    (user, false)
                }
            };

            for role in &entry.roles {
                sqlx::query(
                    "INSERT INTO user_roles (user_id, role_name, assigned_by) \
                     VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
                )
                .bind(user.id)
                .bind(role)
                .bind(assigned_by)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to assign imported role", e)
                })?;
            }

            if existed {
                updated.push(user);
            } else {
                created.push(user);
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit import transaction", e)
        })?;

        Ok(BulkImportRows { created, updated })
    }

    /// Update the profile and/or address of an existing user.
    ///
    /// `None` leaves the stored value untouched.
    pub async fn update_profile(
        &self,
        id: Uuid,
        profile: Option<&Profile>,
        address: Option<&Address>,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET profile = COALESCE($2, profile), \
             address = COALESCE($3, address) WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(profile.map(Json))
        .bind(address.map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))
    }
}
