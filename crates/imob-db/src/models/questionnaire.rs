//! Questionnaire database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the questionnaires table
#[derive(Debug, Clone, FromRow)]
pub struct QuestionnaireModel {
    pub id: i64,
    pub question: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
