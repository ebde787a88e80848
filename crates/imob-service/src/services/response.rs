//! Survey response service
//!
//! CRUD over responses; reads join the parent questionnaire, removal is a
//! soft delete consistent with questionnaires.

use chrono::Utc;
use imob_core::entities::SurveyResponse;
use imob_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateResponseRequest, ResponseDetail, UpdateResponseRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Survey response service
pub struct ResponseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResponseService<'a> {
    /// Create a new ResponseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new response; the questionnaire must exist and be live
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateResponseRequest) -> ServiceResult<ResponseDetail> {
        let questionnaire = self
            .ctx
            .questionnaire_repo()
            .find_by_id(request.questionnaire_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Questionnaire", request.questionnaire_id.to_string())
            })?;

        let response = SurveyResponse::new(
            self.ctx.generate_id(),
            request.answer,
            request.questionnaire_id,
        );

        self.ctx.response_repo().create(&response).await?;
        info!(response_id = %response.id, "Response created");

        Ok(ResponseDetail::from((response, Some(questionnaire))))
    }

    /// List live responses with their questionnaire resolved
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ResponseDetail>> {
        let rows = self.ctx.response_repo().list().await?;
        Ok(rows.into_iter().map(ResponseDetail::from).collect())
    }

    /// List live responses for one questionnaire
    #[instrument(skip(self))]
    pub async fn list_by_questionnaire(
        &self,
        questionnaire_id: Snowflake,
    ) -> ServiceResult<Vec<ResponseDetail>> {
        let rows = self
            .ctx
            .response_repo()
            .list_by_questionnaire(questionnaire_id)
            .await?;
        Ok(rows.into_iter().map(ResponseDetail::from).collect())
    }

    /// Get one response by id
    #[instrument(skip(self))]
    pub async fn get(&self, response_id: Snowflake) -> ServiceResult<ResponseDetail> {
        let response = self
            .ctx
            .response_repo()
            .find_by_id(response_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Response", response_id.to_string()))?;

        Ok(ResponseDetail::from(&response))
    }

    /// Update the answer or re-point the questionnaire reference
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        response_id: Snowflake,
        request: UpdateResponseRequest,
    ) -> ServiceResult<ResponseDetail> {
        let mut response = self
            .ctx
            .response_repo()
            .find_by_id(response_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Response", response_id.to_string()))?;

        if let Some(answer) = request.answer {
            response.answer = answer;
        }
        if let Some(questionnaire_id) = request.questionnaire_id {
            self.ctx
                .questionnaire_repo()
                .find_by_id(questionnaire_id)
                .await?
                .ok_or_else(|| {
                    ServiceError::not_found("Questionnaire", questionnaire_id.to_string())
                })?;
            response.questionnaire_id = questionnaire_id;
        }
        response.updated_at = Utc::now();

        self.ctx.response_repo().update(&response).await?;
        info!(response_id = %response_id, "Response updated");

        Ok(ResponseDetail::from(&response))
    }

    /// Soft-delete a response; NotFound when absent or already deleted
    #[instrument(skip(self))]
    pub async fn remove(&self, response_id: Snowflake) -> ServiceResult<()> {
        self.ctx.response_repo().soft_delete(response_id).await?;
        info!(response_id = %response_id, "Response soft-deleted");
        Ok(())
    }
}
