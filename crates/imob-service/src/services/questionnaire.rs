//! Questionnaire service
//!
//! CRUD over questionnaires; removal is a soft delete and listings exclude
//! deleted rows.

use chrono::Utc;
use imob_core::entities::Questionnaire;
use imob_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateQuestionnaireRequest, QuestionnaireResponse, UpdateQuestionnaireRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Questionnaire service
pub struct QuestionnaireService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuestionnaireService<'a> {
    /// Create a new QuestionnaireService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new questionnaire
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateQuestionnaireRequest,
    ) -> ServiceResult<QuestionnaireResponse> {
        let questionnaire = Questionnaire::new(self.ctx.generate_id(), request.question);

        self.ctx.questionnaire_repo().create(&questionnaire).await?;
        info!(questionnaire_id = %questionnaire.id, "Questionnaire created");

        Ok(QuestionnaireResponse::from(&questionnaire))
    }

    /// List live questionnaires
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<QuestionnaireResponse>> {
        let questionnaires = self.ctx.questionnaire_repo().list().await?;
        Ok(questionnaires.iter().map(QuestionnaireResponse::from).collect())
    }

    /// Get one questionnaire by id
    #[instrument(skip(self))]
    pub async fn get(&self, questionnaire_id: Snowflake) -> ServiceResult<QuestionnaireResponse> {
        let questionnaire = self
            .ctx
            .questionnaire_repo()
            .find_by_id(questionnaire_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Questionnaire", questionnaire_id.to_string())
            })?;

        Ok(QuestionnaireResponse::from(&questionnaire))
    }

    /// Update the question text
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        questionnaire_id: Snowflake,
        request: UpdateQuestionnaireRequest,
    ) -> ServiceResult<QuestionnaireResponse> {
        let mut questionnaire = self
            .ctx
            .questionnaire_repo()
            .find_by_id(questionnaire_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Questionnaire", questionnaire_id.to_string())
            })?;

        questionnaire.question = request.question;
        questionnaire.updated_at = Utc::now();

        self.ctx.questionnaire_repo().update(&questionnaire).await?;
        info!(questionnaire_id = %questionnaire_id, "Questionnaire updated");

        Ok(QuestionnaireResponse::from(&questionnaire))
    }

    /// Soft-delete a questionnaire
    #[instrument(skip(self))]
    pub async fn remove(&self, questionnaire_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .questionnaire_repo()
            .soft_delete(questionnaire_id)
            .await?;
        info!(questionnaire_id = %questionnaire_id, "Questionnaire soft-deleted");
        Ok(())
    }
}
