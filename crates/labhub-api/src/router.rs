//! Route definitions for the LabHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(test_routes())
        .merge(permission_routes())
        .merge(role_routes())
        .merge(access_pass_routes())
        .merge(health_routes());

    Router::new().nest("/api/v1", api_routes).with_state(state)
}

/// User record endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::bulk_create_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", patch(handlers::user::update_user))
        .route("/users/{id}/roles", post(handlers::role::assign_role_to_user))
}

/// Diagnostic test endpoints
fn test_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/tests", get(handlers::test::list_user_tests))
        .route("/users/{id}/tests", post(handlers::test::create_user_test))
        .route("/tests/{id}", get(handlers::test::get_test))
        .route("/test-types", get(handlers::test::list_test_types))
}

/// Permission catalog endpoints
fn permission_routes() -> Router<AppState> {
    Router::new()
        .route("/permissions", get(handlers::permission::list_permissions))
        .route("/permissions", post(handlers::permission::create_permission))
        .route(
            "/roles/{name}/permissions",
            post(handlers::permission::assign_permission_to_role),
        )
}

/// Role catalog endpoints
fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(handlers::role::list_roles))
        .route("/roles", post(handlers::role::create_role))
}

/// Access pass endpoints
fn access_pass_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{id}/access-passes",
            post(handlers::access_pass::grant_access_pass),
        )
        .route(
            "/users/{id}/access-passes",
            delete(handlers::access_pass::revoke_access_pass),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
