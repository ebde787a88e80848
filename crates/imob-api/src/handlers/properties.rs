//! Property handlers
//!
//! Endpoints for property records, lifecycle toggling, and bulk sheet
//! import/export. Routes live under /imobs.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use imob_core::Snowflake;
use imob_service::{
    CreatePropertyRequest, ImportSummary, PropertyResponse, PropertyService,
    UpdatePropertyRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, CsvDownload, NoContent};
use crate::state::AppState;

use super::users::read_upload;

fn parse_property_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid property_id format"))
}

/// Create a new property
///
/// POST /imobs
pub async fn create_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePropertyRequest>,
) -> ApiResult<Created<Json<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List active properties
///
/// GET /imobs
pub async fn list_properties(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let response = service.list(false).await?;
    Ok(Json(response))
}

/// List every property, disabled included
///
/// GET /imobs/all
pub async fn list_all_properties(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let response = service.list(true).await?;
    Ok(Json(response))
}

/// Get a property by ID
///
/// GET /imobs/{property_id}
pub async fn get_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_property_id(&property_id)?;

    let service = PropertyService::new(state.service_context());
    let response = service.get(property_id).await?;
    Ok(Json(response))
}

/// Update a property
///
/// PUT /imobs/{property_id}
pub async fn update_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePropertyRequest>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_property_id(&property_id)?;

    let service = PropertyService::new(state.service_context());
    let response = service.update(property_id, request).await?;
    Ok(Json(response))
}

/// Remove a property
///
/// DELETE /imobs/{property_id}
pub async fn remove_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<NoContent> {
    let property_id = parse_property_id(&property_id)?;

    let service = PropertyService::new(state.service_context());
    service.remove(property_id).await?;
    Ok(NoContent)
}

/// Re-enable a property
///
/// PATCH /imobs/{property_id}/activate
pub async fn activate_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_property_id(&property_id)?;

    let service = PropertyService::new(state.service_context());
    let response = service.activate(property_id).await?;
    Ok(Json(response))
}

/// Soft-disable a property
///
/// PATCH /imobs/{property_id}/deactivate
pub async fn deactivate_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_property_id(&property_id)?;

    let service = PropertyService::new(state.service_context());
    let response = service.deactivate(property_id).await?;
    Ok(Json(response))
}

/// Bulk-import properties from an uploaded sheet
///
/// POST /imobs/import (multipart, field "file")
pub async fn import_properties(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<ImportSummary>> {
    let bytes = read_upload(multipart).await?;

    let service = PropertyService::new(state.service_context());
    let summary = service.import_sheet(&bytes).await?;
    Ok(Json(summary))
}

/// Export every property to a downloadable sheet
///
/// GET /imobs/export
pub async fn export_properties(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<CsvDownload> {
    let service = PropertyService::new(state.service_context());
    let bytes = service.export_sheet().await?;
    Ok(CsvDownload::new("properties.csv", bytes))
}
