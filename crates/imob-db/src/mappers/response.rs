//! Survey response entity <-> model mappers

use imob_core::entities::{Questionnaire, SurveyResponse};
use imob_core::value_objects::Snowflake;

use crate::models::{ResponseModel, ResponseWithQuestionnaireModel};

impl From<ResponseModel> for SurveyResponse {
    fn from(model: ResponseModel) -> Self {
        SurveyResponse {
            id: Snowflake::new(model.id),
            answer: model.answer,
            questionnaire_id: Snowflake::new(model.questionnaire_id),
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a joined row into the response and its (possibly absent) questionnaire
impl From<ResponseWithQuestionnaireModel> for (SurveyResponse, Option<Questionnaire>) {
    fn from(model: ResponseWithQuestionnaireModel) -> Self {
        let response = SurveyResponse {
            id: Snowflake::new(model.id),
            answer: model.answer,
            questionnaire_id: Snowflake::new(model.questionnaire_id),
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };

        let questionnaire = match (
            model.q_id,
            model.q_question,
            model.q_is_deleted,
            model.q_created_at,
            model.q_updated_at,
        ) {
            (Some(id), Some(question), Some(is_deleted), Some(created_at), Some(updated_at)) => {
                Some(Questionnaire {
                    id: Snowflake::new(id),
                    question,
                    is_deleted,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        (response, questionnaire)
    }
}
