//! Collaborator handlers - plain CRUD

use axum::{
    extract::{Path, State},
    Json,
};
use imob_core::Snowflake;
use imob_service::{
    CollaboratorResponse, CollaboratorService, CreateCollaboratorRequest,
    UpdateCollaboratorRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_collaborator_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid collaborator_id format"))
}

/// Create a new collaborator
///
/// POST /collaborators
pub async fn create_collaborator(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCollaboratorRequest>,
) -> ApiResult<Created<Json<CollaboratorResponse>>> {
    let service = CollaboratorService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List all collaborators
///
/// GET /collaborators
pub async fn list_collaborators(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<CollaboratorResponse>>> {
    let service = CollaboratorService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a collaborator by ID
///
/// GET /collaborators/{collaborator_id}
pub async fn get_collaborator(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(collaborator_id): Path<String>,
) -> ApiResult<Json<CollaboratorResponse>> {
    let collaborator_id = parse_collaborator_id(&collaborator_id)?;

    let service = CollaboratorService::new(state.service_context());
    let response = service.get(collaborator_id).await?;
    Ok(Json(response))
}

/// Update a collaborator
///
/// PUT /collaborators/{collaborator_id}
pub async fn update_collaborator(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(collaborator_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCollaboratorRequest>,
) -> ApiResult<Json<CollaboratorResponse>> {
    let collaborator_id = parse_collaborator_id(&collaborator_id)?;

    let service = CollaboratorService::new(state.service_context());
    let response = service.update(collaborator_id, request).await?;
    Ok(Json(response))
}

/// Remove a collaborator
///
/// DELETE /collaborators/{collaborator_id}
pub async fn remove_collaborator(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(collaborator_id): Path<String>,
) -> ApiResult<NoContent> {
    let collaborator_id = parse_collaborator_id(&collaborator_id)?;

    let service = CollaboratorService::new(state.service_context());
    service.remove(collaborator_id).await?;
    Ok(NoContent)
}
