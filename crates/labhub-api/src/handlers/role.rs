//! Role catalog and role assignment handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use labhub_entity::permission::names::{ASSIGN_ROLE_TO_USER, CREATE_NEW_ROLE, LIST_ROLES};
use labhub_entity::role::{Role, RoleWithPermissions};

use crate::dto::request::{AssignRoleBody, CreateCatalogEntryBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn list_roles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<RoleWithPermissions>>>, ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), LIST_ROLES)
        .await?;

    let roles = state.permission_service.list_roles().await?;
    Ok(Json(ApiResponse::ok(roles)))
}

/// POST /api/v1/roles
pub async fn create_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateCatalogEntryBody>,
) -> Result<(StatusCode, Json<ApiResponse<Role>>), ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), CREATE_NEW_ROLE)
        .await?;

    let role = state.permission_service.create_role(&body.name, &auth).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(role))))
}

/// POST /api/v1/users/{id}/roles
pub async fn assign_role_to_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignRoleBody>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), ASSIGN_ROLE_TO_USER)
        .await?;

    state
        .permission_service
        .assign_role_to_user(&body.name, id, &auth)
        .await?;

    let roles = state.role_repo.roles_for_user(id).await?;
    Ok(Json(ApiResponse::ok(roles)))
}
