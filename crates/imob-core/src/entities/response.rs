//! Survey response entity - an answer referencing its questionnaire

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Survey response entity
///
/// Holds a non-owning reference to exactly one questionnaire, resolved by
/// join at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub id: Snowflake,
    pub answer: String,
    pub questionnaire_id: Snowflake,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SurveyResponse {
    /// Create a new SurveyResponse
    pub fn new(id: Snowflake, answer: String, questionnaire_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            answer,
            questionnaire_id,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}
