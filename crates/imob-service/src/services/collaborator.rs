//! Collaborator service
//!
//! Plain CRUD over collaborator contact records.

use chrono::Utc;
use imob_core::entities::Collaborator;
use imob_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CollaboratorResponse, CreateCollaboratorRequest, UpdateCollaboratorRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Collaborator service
pub struct CollaboratorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CollaboratorService<'a> {
    /// Create a new CollaboratorService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new collaborator
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateCollaboratorRequest,
    ) -> ServiceResult<CollaboratorResponse> {
        let collaborator = Collaborator::new(
            self.ctx.generate_id(),
            request.name,
            request.email,
            request.phone,
        );

        self.ctx.collaborator_repo().create(&collaborator).await?;
        info!(collaborator_id = %collaborator.id, "Collaborator created");

        Ok(CollaboratorResponse::from(&collaborator))
    }

    /// List all collaborators
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CollaboratorResponse>> {
        let collaborators = self.ctx.collaborator_repo().list().await?;
        Ok(collaborators.iter().map(CollaboratorResponse::from).collect())
    }

    /// Get one collaborator by id
    #[instrument(skip(self))]
    pub async fn get(&self, collaborator_id: Snowflake) -> ServiceResult<CollaboratorResponse> {
        let collaborator = self
            .ctx
            .collaborator_repo()
            .find_by_id(collaborator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Collaborator", collaborator_id.to_string()))?;

        Ok(CollaboratorResponse::from(&collaborator))
    }

    /// Update a collaborator
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        collaborator_id: Snowflake,
        request: UpdateCollaboratorRequest,
    ) -> ServiceResult<CollaboratorResponse> {
        let mut collaborator = self
            .ctx
            .collaborator_repo()
            .find_by_id(collaborator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Collaborator", collaborator_id.to_string()))?;

        if let Some(name) = request.name {
            collaborator.name = name;
        }
        if let Some(email) = request.email {
            collaborator.email = email;
        }
        if let Some(phone) = request.phone {
            collaborator.phone = phone;
        }
        collaborator.updated_at = Utc::now();

        self.ctx.collaborator_repo().update(&collaborator).await?;
        info!(collaborator_id = %collaborator_id, "Collaborator updated");

        Ok(CollaboratorResponse::from(&collaborator))
    }

    /// Hard-delete a collaborator
    #[instrument(skip(self))]
    pub async fn remove(&self, collaborator_id: Snowflake) -> ServiceResult<()> {
        self.ctx.collaborator_repo().delete(collaborator_id).await?;
        info!(collaborator_id = %collaborator_id, "Collaborator removed");
        Ok(())
    }
}
