//! PostgreSQL implementation of ResponseRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use imob_core::entities::{Questionnaire, SurveyResponse};
use imob_core::traits::{RepoResult, ResponseRepository};
use imob_core::value_objects::Snowflake;

use crate::models::{ResponseModel, ResponseWithQuestionnaireModel};

use super::error::{map_db_error, response_not_found};

const JOINED_COLUMNS: &str = "r.id, r.answer, r.questionnaire_id, r.is_deleted, r.created_at, \
                              r.updated_at, q.id AS q_id, q.question AS q_question, \
                              q.is_deleted AS q_is_deleted, q.created_at AS q_created_at, \
                              q.updated_at AS q_updated_at";

/// PostgreSQL implementation of ResponseRepository
#[derive(Clone)]
pub struct PgResponseRepository {
    pool: PgPool,
}

impl PgResponseRepository {
    /// Create a new PgResponseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseRepository for PgResponseRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SurveyResponse>> {
        let result = sqlx::query_as::<_, ResponseModel>(
            r"
            SELECT id, answer, questionnaire_id, is_deleted, created_at, updated_at
            FROM responses
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SurveyResponse::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<(SurveyResponse, Option<Questionnaire>)>> {
        let result = sqlx::query_as::<_, ResponseWithQuestionnaireModel>(&format!(
            "SELECT {JOINED_COLUMNS} \
             FROM responses r \
             LEFT JOIN questionnaires q ON q.id = r.questionnaire_id \
             WHERE r.is_deleted = FALSE \
             ORDER BY r.created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_questionnaire(
        &self,
        questionnaire_id: Snowflake,
    ) -> RepoResult<Vec<(SurveyResponse, Option<Questionnaire>)>> {
        let result = sqlx::query_as::<_, ResponseWithQuestionnaireModel>(&format!(
            "SELECT {JOINED_COLUMNS} \
             FROM responses r \
             LEFT JOIN questionnaires q ON q.id = r.questionnaire_id \
             WHERE r.is_deleted = FALSE AND r.questionnaire_id = $1 \
             ORDER BY r.created_at"
        ))
        .bind(questionnaire_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, response: &SurveyResponse) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO responses (id, answer, questionnaire_id, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(response.id.into_inner())
        .bind(&response.answer)
        .bind(response.questionnaire_id.into_inner())
        .bind(response.is_deleted)
        .bind(response.created_at)
        .bind(response.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, response: &SurveyResponse) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE responses
            SET answer = $2, questionnaire_id = $3, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(response.id.into_inner())
        .bind(&response.answer)
        .bind(response.questionnaire_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(response_not_found(response.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE responses
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(response_not_found(id));
        }

        Ok(())
    }
}
