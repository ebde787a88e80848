//! PostgreSQL implementation of QuestionnaireRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use imob_core::entities::Questionnaire;
use imob_core::traits::{QuestionnaireRepository, RepoResult};
use imob_core::value_objects::Snowflake;

use crate::models::QuestionnaireModel;

use super::error::{map_db_error, questionnaire_not_found};

/// PostgreSQL implementation of QuestionnaireRepository
#[derive(Clone)]
pub struct PgQuestionnaireRepository {
    pool: PgPool,
}

impl PgQuestionnaireRepository {
    /// Create a new PgQuestionnaireRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionnaireRepository for PgQuestionnaireRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Questionnaire>> {
        let result = sqlx::query_as::<_, QuestionnaireModel>(
            r"
            SELECT id, question, is_deleted, created_at, updated_at
            FROM questionnaires
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Questionnaire::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Questionnaire>> {
        let result = sqlx::query_as::<_, QuestionnaireModel>(
            r"
            SELECT id, question, is_deleted, created_at, updated_at
            FROM questionnaires
            WHERE is_deleted = FALSE
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Questionnaire::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, questionnaire: &Questionnaire) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO questionnaires (id, question, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(questionnaire.id.into_inner())
        .bind(&questionnaire.question)
        .bind(questionnaire.is_deleted)
        .bind(questionnaire.created_at)
        .bind(questionnaire.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, questionnaire: &Questionnaire) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE questionnaires
            SET question = $2, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(questionnaire.id.into_inner())
        .bind(&questionnaire.question)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(questionnaire_not_found(questionnaire.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE questionnaires
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(questionnaire_not_found(id));
        }

        Ok(())
    }
}
