//! Password hashing, verification, and reset-code issuance
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::error::AppError;

/// Reset codes expire exactly one hour after issuance
pub const RESET_CODE_TTL_SECS: i64 = 3600;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if verification fails or the hash is invalid
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check whether a stored value already carries the argon2 digest format
///
/// Guards the startup migration against re-hashing an already-hashed value.
#[must_use]
pub fn is_password_hashed(value: &str) -> bool {
    value.starts_with("$argon2")
}

/// Generate a 6-digit numeric reset code
#[must_use]
pub fn generate_reset_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// Expiry timestamp for a reset code issued now
#[must_use]
pub fn reset_code_expiry() -> DateTime<Utc> {
    Utc::now() + Duration::seconds(RESET_CODE_TTL_SECS)
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a hash
    ///
    /// # Errors
    /// Returns an error if verification fails
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if self.verify(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "secret";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        // Hash should be different each time (different salt)
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password_success() {
        let password = "secret";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_password_failure() {
        let hash = hash_password("secret").unwrap();

        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_is_password_hashed() {
        let hash = hash_password("secret").unwrap();
        assert!(is_password_hashed(&hash));
        assert!(!is_password_hashed("secret"));
        assert!(!is_password_hashed("123456"));
    }

    #[test]
    fn test_generate_reset_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_reset_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_reset_code_expiry_is_one_hour_out() {
        let expiry = reset_code_expiry();
        let delta = (expiry - Utc::now()).num_seconds();
        assert!((RESET_CODE_TTL_SECS - 5..=RESET_CODE_TTL_SECS).contains(&delta));
    }

    #[test]
    fn test_password_service() {
        let service = PasswordService::new();
        let hash = service.hash("secret").unwrap();

        assert!(service.verify("secret", &hash).unwrap());
        assert!(!service.verify("wrong", &hash).unwrap());
        assert!(service.verify_or_error("secret", &hash).is_ok());
        assert!(matches!(
            service.verify_or_error("wrong", &hash),
            Err(AppError::InvalidCredentials)
        ));
    }
}
