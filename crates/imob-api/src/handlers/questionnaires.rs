//! Questionnaire handlers - CRUD with soft deletion

use axum::{
    extract::{Path, State},
    Json,
};
use imob_core::Snowflake;
use imob_service::{
    CreateQuestionnaireRequest, QuestionnaireResponse, QuestionnaireService,
    UpdateQuestionnaireRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_questionnaire_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid questionnaire_id format"))
}

/// Create a new questionnaire
///
/// POST /questionnaires
pub async fn create_questionnaire(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateQuestionnaireRequest>,
) -> ApiResult<Created<Json<QuestionnaireResponse>>> {
    let service = QuestionnaireService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List live questionnaires
///
/// GET /questionnaires
pub async fn list_questionnaires(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<QuestionnaireResponse>>> {
    let service = QuestionnaireService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a questionnaire by ID
///
/// GET /questionnaires/{questionnaire_id}
pub async fn get_questionnaire(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(questionnaire_id): Path<String>,
) -> ApiResult<Json<QuestionnaireResponse>> {
    let questionnaire_id = parse_questionnaire_id(&questionnaire_id)?;

    let service = QuestionnaireService::new(state.service_context());
    let response = service.get(questionnaire_id).await?;
    Ok(Json(response))
}

/// Update a questionnaire
///
/// PUT /questionnaires/{questionnaire_id}
pub async fn update_questionnaire(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(questionnaire_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateQuestionnaireRequest>,
) -> ApiResult<Json<QuestionnaireResponse>> {
    let questionnaire_id = parse_questionnaire_id(&questionnaire_id)?;

    let service = QuestionnaireService::new(state.service_context());
    let response = service.update(questionnaire_id, request).await?;
    Ok(Json(response))
}

/// Soft-delete a questionnaire
///
/// DELETE /questionnaires/{questionnaire_id}
pub async fn remove_questionnaire(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(questionnaire_id): Path<String>,
) -> ApiResult<NoContent> {
    let questionnaire_id = parse_questionnaire_id(&questionnaire_id)?;

    let service = QuestionnaireService::new(state.service_context());
    service.remove(questionnaire_id).await?;
    Ok(NoContent)
}
