//! Collaborator entity - a plain contact record

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Collaborator entity (no lifecycle flag, plain CRUD)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collaborator {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collaborator {
    /// Create a new Collaborator
    pub fn new(id: Snowflake, name: String, email: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            phone,
            created_at: now,
            updated_at: now,
        }
    }
}
