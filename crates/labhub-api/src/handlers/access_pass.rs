//! Access pass handlers.
//!
//! Routes are subject-scoped: `{id}` is the user whose resources are
//! delegated, with the actor named in the payload.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use labhub_entity::access_pass::AccessPass;
use labhub_entity::permission::names::GRANT_ACCESS_PASS;

use crate::dto::request::{GrantAccessPassBody, RevokeAccessPassParams};
use crate::dto::response::{ApiResponse, RevokedResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/users/{id}/access-passes
pub async fn grant_access_pass(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(subject_user_id): Path<Uuid>,
    Json(body): Json<GrantAccessPassBody>,
) -> Result<(StatusCode, Json<ApiResponse<AccessPass>>), ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), GRANT_ACCESS_PASS)
        .await?;

    let pass = state
        .access_pass_service
        .grant(body.actor_user_id, subject_user_id, &auth)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pass))))
}

/// DELETE /api/v1/users/{id}/access-passes?actor_user_id={uuid}
pub async fn revoke_access_pass(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(subject_user_id): Path<Uuid>,
    Query(params): Query<RevokeAccessPassParams>,
) -> Result<Json<ApiResponse<RevokedResponse>>, ApiError> {
    state
        .permission_checker
        .require_permission(auth.user_id(), GRANT_ACCESS_PASS)
        .await?;

    let revoked = state
        .access_pass_service
        .revoke(params.actor_user_id, subject_user_id, &auth)
        .await?;

    Ok(Json(ApiResponse::ok(RevokedResponse { revoked })))
}
