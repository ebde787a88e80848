//! Questionnaire entity <-> model mapper

use imob_core::entities::Questionnaire;
use imob_core::value_objects::Snowflake;

use crate::models::QuestionnaireModel;

impl From<QuestionnaireModel> for Questionnaire {
    fn from(model: QuestionnaireModel) -> Self {
        Questionnaire {
            id: Snowflake::new(model.id),
            question: model.question,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
