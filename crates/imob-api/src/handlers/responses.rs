//! Survey response handlers - CRUD with soft deletion and questionnaire join

use axum::{
    extract::{Path, State},
    Json,
};
use imob_core::Snowflake;
use imob_service::{CreateResponseRequest, ResponseDetail, ResponseService, UpdateResponseRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_response_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid response_id format"))
}

/// Create a new response
///
/// POST /responses
pub async fn create_response(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateResponseRequest>,
) -> ApiResult<Created<Json<ResponseDetail>>> {
    let service = ResponseService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List live responses with their questionnaire resolved
///
/// GET /responses
pub async fn list_responses(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ResponseDetail>>> {
    let service = ResponseService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// List live responses for one questionnaire
///
/// GET /responses/by-question/{questionnaire_id}
pub async fn list_responses_by_questionnaire(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(questionnaire_id): Path<String>,
) -> ApiResult<Json<Vec<ResponseDetail>>> {
    let questionnaire_id: Snowflake = questionnaire_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid questionnaire_id format"))?;

    let service = ResponseService::new(state.service_context());
    let response = service.list_by_questionnaire(questionnaire_id).await?;
    Ok(Json(response))
}

/// Get a response by ID
///
/// GET /responses/{response_id}
pub async fn get_response(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(response_id): Path<String>,
) -> ApiResult<Json<ResponseDetail>> {
    let response_id = parse_response_id(&response_id)?;

    let service = ResponseService::new(state.service_context());
    let response = service.get(response_id).await?;
    Ok(Json(response))
}

/// Update a response
///
/// PUT /responses/{response_id}
pub async fn update_response(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(response_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateResponseRequest>,
) -> ApiResult<Json<ResponseDetail>> {
    let response_id = parse_response_id(&response_id)?;

    let service = ResponseService::new(state.service_context());
    let response = service.update(response_id, request).await?;
    Ok(Json(response))
}

/// Soft-delete a response
///
/// DELETE /responses/{response_id}
pub async fn remove_response(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(response_id): Path<String>,
) -> ApiResult<NoContent> {
    let response_id = parse_response_id(&response_id)?;

    let service = ResponseService::new(state.service_context());
    service.remove(response_id).await?;
    Ok(NoContent)
}
