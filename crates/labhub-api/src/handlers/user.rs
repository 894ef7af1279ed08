//! User resource handlers.
//!
//! All `/users/{id}` routes answer 404 to a caller without access, so a
//! denied caller cannot tell whether the user exists at all.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use labhub_core::error::AppError;
use labhub_entity::permission::names::BULK_CREATE_USERS;
use labhub_entity::user::User;
use labhub_entity::user::model::BulkImportUser;
use labhub_service::user::service::{BulkCreateOutcome, UpdateUserRequest};

use crate::dto::request::{BulkCreateUsersBody, UpdateUserBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_user_access(&state, &auth, id).await?;

    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PATCH /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_user_access(&state, &auth, id).await?;

    let user = state
        .user_service
        .update_user(
            id,
            UpdateUserRequest {
                profile: body.profile,
                address: body.address,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/v1/users
pub async fn bulk_create_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<BulkCreateUsersBody>,
) -> Result<(StatusCode, Json<ApiResponse<BulkCreateOutcome>>), ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), BULK_CREATE_USERS)
        .await?;

    let entries: Vec<BulkImportUser> = body
        .users
        .into_iter()
        .map(|entry| BulkImportUser {
            email: entry.email,
            roles: entry.roles,
        })
        .collect();

    let outcome = state.user_service.bulk_create(&entries, &auth).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(outcome))))
}

/// Resolves the access decision for a user-scoped route.
///
/// Denial becomes `NotFound`, never `Forbidden`.
pub(crate) async fn require_user_access(
    state: &AppState,
    auth: &AuthUser,
    target_user_id: Uuid,
) -> Result<(), ApiError> {
    let manager = state.access_managers.for_authentication(auth);
    if manager.can_access_user(target_user_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("User not found").into())
    }
}
