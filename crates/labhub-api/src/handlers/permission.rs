//! Permission catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use labhub_entity::permission::names::{
    ASSIGN_PERMISSION_TO_ROLE, CREATE_NEW_PERMISSION, LIST_PERMISSIONS,
};
use labhub_entity::permission::Permission;
use labhub_entity::role::RoleWithPermissions;

use crate::dto::request::{AssignPermissionBody, CreateCatalogEntryBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/permissions
pub async fn list_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Permission>>>, ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), LIST_PERMISSIONS)
        .await?;

    let permissions = state.permission_service.list_permissions().await?;
    Ok(Json(ApiResponse::ok(permissions)))
}

/// POST /api/v1/permissions
pub async fn create_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateCatalogEntryBody>,
) -> Result<(StatusCode, Json<ApiResponse<Permission>>), ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), CREATE_NEW_PERMISSION)
        .await?;

    let permission = state
        .permission_service
        .create_permission(&body.name, &auth)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(permission))))
}

/// POST /api/v1/roles/{name}/permissions
pub async fn assign_permission_to_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(role_name): Path<String>,
    Json(body): Json<AssignPermissionBody>,
) -> Result<Json<ApiResponse<RoleWithPermissions>>, ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), ASSIGN_PERMISSION_TO_ROLE)
        .await?;

    let role = state
        .permission_service
        .assign_permission_to_role(&body.name, &role_name, &auth)
        .await?;

    Ok(Json(ApiResponse::ok(role)))
}
