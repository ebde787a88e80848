//! Authentication service
//!
//! Validates email/password pairs and issues signed identity tokens carrying
//! role claims.

use imob_common::auth::verify_password;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, SessionUserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// Both the unknown-email and wrong-password paths answer with the same
    /// `InvalidCredentials` error so callers cannot tell which check failed.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(imob_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(imob_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(imob_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let access_token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.email, &user.roles)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(LoginResponse::new(
            access_token,
            self.ctx.jwt_service().token_expiry(),
            SessionUserResponse::from(&user),
        ))
    }
}

#[cfg(test)]
mod tests {
    // Covered by the service tests with in-memory repositories
}
