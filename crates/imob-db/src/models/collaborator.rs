//! Collaborator database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the collaborators table
#[derive(Debug, Clone, FromRow)]
pub struct CollaboratorModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
