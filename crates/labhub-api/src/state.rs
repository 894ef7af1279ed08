//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

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

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub token_decoder: Arc<TokenDecoder>,
    /// Per-request access manager factory
    pub access_managers: AccessManagerFactory,
    /// Role/permission checker
    pub permission_checker: PermissionChecker,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Role repository
    pub role_repo: Arc<RoleRepository>,
    /// Permission repository
    pub permission_repo: Arc<PermissionRepository>,
    /// Access pass repository
    pub access_pass_repo: Arc<AccessPassRepository>,
    /// Diagnostic test repository
    pub test_repo: Arc<TestRepository>,
    /// Test type repository
    pub test_type_repo: Arc<TestTypeRepository>,

    // ── Services ─────────────────────────────────────────────
    /// User service
    pub user_service: Arc<UserService>,
    /// Permission and role catalog service
    pub permission_service: Arc<PermissionService>,
    /// Diagnostic test service
    pub test_service: Arc<TestService>,
    /// Access pass service
    pub access_pass_service: Arc<AccessPassService>,
}
