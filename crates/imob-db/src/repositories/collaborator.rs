//! PostgreSQL implementation of CollaboratorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use imob_core::entities::Collaborator;
use imob_core::traits::{CollaboratorRepository, RepoResult};
use imob_core::value_objects::Snowflake;

use crate::models::CollaboratorModel;

use super::error::{collaborator_not_found, map_db_error};

/// PostgreSQL implementation of CollaboratorRepository
#[derive(Clone)]
pub struct PgCollaboratorRepository {
    pool: PgPool,
}

impl PgCollaboratorRepository {
    /// Create a new PgCollaboratorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollaboratorRepository for PgCollaboratorRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Collaborator>> {
        let result = sqlx::query_as::<_, CollaboratorModel>(
            "SELECT id, name, email, phone, created_at, updated_at FROM collaborators WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Collaborator::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Collaborator>> {
        let result = sqlx::query_as::<_, CollaboratorModel>(
            "SELECT id, name, email, phone, created_at, updated_at FROM collaborators ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Collaborator::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, collaborator: &Collaborator) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO collaborators (id, name, email, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(collaborator.id.into_inner())
        .bind(&collaborator.name)
        .bind(&collaborator.email)
        .bind(&collaborator.phone)
        .bind(collaborator.created_at)
        .bind(collaborator.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, collaborator: &Collaborator) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE collaborators
            SET name = $2, email = $3, phone = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(collaborator.id.into_inner())
        .bind(&collaborator.name)
        .bind(&collaborator.email)
        .bind(&collaborator.phone)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(collaborator_not_found(collaborator.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM collaborators WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(collaborator_not_found(id));
        }

        Ok(())
    }
}
