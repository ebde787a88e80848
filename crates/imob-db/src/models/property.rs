//! Property database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the properties table
#[derive(Debug, Clone, FromRow)]
pub struct PropertyModel {
    pub id: i64,
    pub kind: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
    pub water_account: Option<String>,
    pub power_account: Option<String>,
    pub owner_id: Option<i64>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
