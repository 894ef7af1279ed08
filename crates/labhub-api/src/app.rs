//! Application builder: wires repositories, services, middleware, and
//! routes into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use labhub_auth::access::manager::AccessManagerFactory;
use labhub_auth::rbac::checker::PermissionChecker;
use labhub_auth::token::decoder::TokenDecoder;
use labhub_core::config::AppConfig;

use labhub_database::repositories::access_pass::AccessPassRepository;
use labhub_database::repositories::permission::PermissionRepository;
use labhub_database::repositories::role::RoleRepository;
use labhub_database::repositories::test::TestRepository;
use labhub_database::repositories::test_type::TestTypeRepository;
use labhub_database::repositories::user::UserRepository;

use labhub_service::access_pass::service::AccessPassService;
use labhub_service::permission::service::PermissionService;
use labhub_service::test::service::TestService;
use labhub_service::user::service::UserService;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Constructs the full `AppState` from configuration and a live pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let role_repo = Arc::new(RoleRepository::new(db_pool.clone()));
    let permission_repo = Arc::new(PermissionRepository::new(db_pool.clone()));
    let access_pass_repo = Arc::new(AccessPassRepository::new(db_pool.clone()));
    let test_repo = Arc::new(TestRepository::new(db_pool.clone()));
    let test_type_repo = Arc::new(TestTypeRepository::new(db_pool.clone()));

    let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
    let access_managers = AccessManagerFactory::new(Arc::clone(&access_pass_repo));
    let permission_checker = PermissionChecker::new(Arc::clone(&role_repo));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&role_repo),
    ));
    let permission_service = Arc::new(PermissionService::new(
        Arc::clone(&permission_repo),
        Arc::clone(&role_repo),
        Arc::clone(&user_repo),
    ));
    let test_service = Arc::new(TestService::new(
        Arc::clone(&test_repo),
        Arc::clone(&test_type_repo),
        permission_checker.clone(),
    ));
    let access_pass_service = Arc::new(AccessPassService::new(
        Arc::clone(&access_pass_repo),
        Arc::clone(&user_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        token_decoder,
        access_managers,
        permission_checker,
        user_repo,
        role_repo,
        permission_repo,
        access_pass_repo,
        test_repo,
        test_type_repo,
        user_service,
        permission_service,
        test_service,
        access_pass_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}
