//! Questionnaire entity - a question with soft deletion

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Questionnaire entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    pub id: Snowflake,
    pub question: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Questionnaire {
    /// Create a new Questionnaire
    pub fn new(id: Snowflake, question: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            question,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}
