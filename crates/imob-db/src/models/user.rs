//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub cpf: String,
    pub phone: String,
    pub cargo: String,
    pub password_reset_code: Option<String>,
    pub reset_code_expires_at: Option<DateTime<Utc>>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Check whether a reset code is pending on this row
    #[inline]
    pub fn has_pending_reset(&self) -> bool {
        self.password_reset_code.is_some()
    }
}
