//! Survey response database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the responses table
#[derive(Debug, Clone, FromRow)]
pub struct ResponseModel {
    pub id: i64,
    pub answer: String,
    pub questionnaire_id: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response row joined with its questionnaire (LEFT JOIN, aliased q_*)
#[derive(Debug, Clone, FromRow)]
pub struct ResponseWithQuestionnaireModel {
    pub id: i64,
    pub answer: String,
    pub questionnaire_id: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub q_id: Option<i64>,
    pub q_question: Option<String>,
    pub q_is_deleted: Option<bool>,
    pub q_created_at: Option<DateTime<Utc>>,
    pub q_updated_at: Option<DateTime<Utc>>,
}
