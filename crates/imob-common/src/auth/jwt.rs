//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! Tokens are short-lived access tokens carrying the caller's role claims.

use chrono::{Duration, Utc};
use imob_core::{Snowflake, UserRole};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account email
    pub email: String,
    /// Role labels held by the account
    pub roles: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Parse the role labels; unknown labels are dropped
    #[must_use]
    pub fn roles(&self) -> Vec<UserRole> {
        self.roles
            .iter()
            .filter_map(|label| label.parse().ok())
            .collect()
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Token lifetime in seconds
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Encode an access token carrying identity and role claims
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(
        &self,
        user_id: Snowflake,
        email: &str,
        roles: &[UserRole],
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            roles: roles.iter().map(|role| role.as_str().to_string()).collect(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_and_decode_token() {
        let service = create_test_service();
        let user_id = Snowflake::new(12345);

        let token = service
            .issue_token(user_id, "a@b.com", &[UserRole::User])
            .unwrap();
        assert!(!token.is_empty());

        let claims = service.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "12345");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.roles, vec!["USER".to_string()]);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_roles_roundtrip() {
        let service = create_test_service();
        let token = service
            .issue_token(
                Snowflake::new(7),
                "admin@admin.com",
                &[UserRole::Admin, UserRole::Moderator],
            )
            .unwrap();

        let claims = service.decode_token(&token).unwrap();
        assert_eq!(claims.roles(), vec![UserRole::Admin, UserRole::Moderator]);
        assert_eq!(claims.user_id().unwrap(), Snowflake::new(7));
    }

    #[test]
    fn test_unknown_role_labels_are_dropped() {
        let claims = Claims {
            sub: "1".to_string(),
            email: "x@y.com".to_string(),
            roles: vec!["ADMIN".to_string(), "SUPERUSER".to_string()],
            iat: 0,
            exp: i64::MAX,
        };
        assert_eq!(claims.roles(), vec![UserRole::Admin]);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.decode_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("another-secret-entirely", 3600);

        let token = service
            .issue_token(Snowflake::new(1), "a@b.com", &[UserRole::User])
            .unwrap();
        assert!(matches!(
            other.decode_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_claims_user_id() {
        let claims = Claims {
            sub: "12345".to_string(),
            email: "a@b.com".to_string(),
            roles: vec![],
            iat: 0,
            exp: i64::MAX,
        };

        assert_eq!(claims.user_id().unwrap(), Snowflake::new(12345));
    }
}
