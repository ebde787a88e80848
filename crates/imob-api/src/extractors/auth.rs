//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header, carrying
//! the identity and role claims needed by the role gate. Fails closed:
//! requests without a valid token never reach a handler that requires one.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use imob_common::AppError;
use imob_core::{authorize, Snowflake, UserRole};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: Snowflake,
    /// Email claim
    pub email: String,
    /// Role claims
    pub roles: Vec<UserRole>,
}

impl AuthUser {
    /// Deny unless the caller holds at least one of the required roles
    ///
    /// An empty `required` slice means no restriction.
    pub fn require_role(&self, required: &[UserRole]) -> Result<(), ApiError> {
        if authorize(required, &self.roles) {
            Ok(())
        } else {
            Err(ApiError::App(AppError::InsufficientPermissions))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract identity from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser {
            user_id,
            roles: claims.roles(),
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(roles: Vec<UserRole>) -> AuthUser {
        AuthUser {
            user_id: Snowflake::new(1),
            email: "a@b.com".to_string(),
            roles,
        }
    }

    #[test]
    fn test_require_role_passes_on_intersection() {
        assert!(caller(vec![UserRole::Admin]).require_role(&[UserRole::Admin]).is_ok());
        assert!(caller(vec![UserRole::User, UserRole::Admin])
            .require_role(&[UserRole::Admin])
            .is_ok());
    }

    #[test]
    fn test_require_role_empty_means_no_restriction() {
        assert!(caller(vec![]).require_role(&[]).is_ok());
    }

    #[test]
    fn test_require_role_denies() {
        assert!(caller(vec![UserRole::User]).require_role(&[UserRole::Admin]).is_err());
        assert!(caller(vec![]).require_role(&[UserRole::Admin]).is_err());
    }
}
