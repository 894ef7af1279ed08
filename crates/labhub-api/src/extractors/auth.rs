//! `AuthUser` extractor: pulls the JWT from the Authorization header,
//! validates it, and loads the authenticated user with their roles.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use labhub_auth::context::Authentication;
use labhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Roles are loaded fresh from the store on every request. The token
/// carries identity only, so a role revocation takes effect on the next
/// request without waiting for the token to expire.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Authentication);

impl AuthUser {
    /// Returns the inner `Authentication`.
    pub fn authentication(&self) -> &Authentication {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Authentication;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        // Decode and validate JWT
        let claims = state.token_decoder.decode(token)?;

        // The user must still exist; a deleted user's token is dead.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        let roles = state.role_repo.roles_for_user(user.id).await?;

        Ok(AuthUser(Authentication::new(user, roles)))
    }
}
