//! User handlers
//!
//! Endpoints for account management, the password-reset flow, lifecycle
//! toggling, and bulk sheet import/export.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use imob_core::{Snowflake, UserRole};
use imob_service::{
    CreateUserRequest, ForgotPasswordRequest, ImportSummary, ResetPasswordRequest,
    UpdatePasswordRequest, UpdateUserRequest, UserResponse, UserService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, CsvDownload, NoContent};
use crate::state::AppState;

fn parse_user_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List active users
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    auth.require_role(&[UserRole::Admin])?;

    let service = UserService::new(state.service_context());
    let response = service.list(false).await?;
    Ok(Json(response))
}

/// List every user, disabled included
///
/// GET /users/all
pub async fn list_all_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    auth.require_role(&[UserRole::Admin])?;

    let service = UserService::new(state.service_context());
    let response = service.list(true).await?;
    Ok(Json(response))
}

/// List active users holding a role
///
/// GET /users/role/{role}
pub async fn list_users_by_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(role): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    auth.require_role(&[UserRole::Admin])?;

    let role: UserRole = role
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown role"))?;

    let service = UserService::new(state.service_context());
    let response = service.list_by_role(role).await?;
    Ok(Json(response))
}

/// Get a user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.get(user_id).await?;
    Ok(Json(response))
}

/// Update a user
///
/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.update(user_id, request).await?;
    Ok(Json(response))
}

/// Remove a user
///
/// DELETE /users/{user_id}
pub async fn remove_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_role(&[UserRole::Admin])?;

    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    service.remove(user_id).await?;
    Ok(NoContent)
}

/// Change a user's password (current password verified)
///
/// PUT /users/{user_id}/password
pub async fn update_user_password(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.update_password(user_id, request).await?;
    Ok(Json(response))
}

/// Start the password-reset flow
///
/// POST /users/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ForgotPasswordRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.forgot_password(request).await?;
    Ok(NoContent)
}

/// Finish the password-reset flow with the emailed code
///
/// POST /users/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.reset_password(request).await?;
    Ok(Json(response))
}

/// Re-enable a user
///
/// PATCH /users/{user_id}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    auth.require_role(&[UserRole::Admin])?;

    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.activate(user_id).await?;
    Ok(Json(response))
}

/// Soft-disable a user
///
/// PATCH /users/{user_id}/deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    auth.require_role(&[UserRole::Admin])?;

    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.deactivate(user_id).await?;
    Ok(Json(response))
}

/// Bulk-import users from an uploaded sheet
///
/// POST /users/import (multipart, field "file")
pub async fn import_users(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<ImportSummary>> {
    auth.require_role(&[UserRole::Admin])?;

    let bytes = read_upload(multipart).await?;

    let service = UserService::new(state.service_context());
    let summary = service.import_sheet(&bytes).await?;
    Ok(Json(summary))
}

/// Export every user to a downloadable sheet
///
/// GET /users/export
pub async fn export_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<CsvDownload> {
    auth.require_role(&[UserRole::Admin])?;

    let service = UserService::new(state.service_context());
    let bytes = service.export_sheet().await?;
    Ok(CsvDownload::new("users.csv", bytes))
}

/// Pull the uploaded file out of a multipart body
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_query(e.to_string()))?
    {
        let is_file = matches!(field.name(), Some("file") | None);
        if is_file || field.file_name().is_some() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::invalid_query(e.to_string()))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(ApiError::invalid_query("Missing multipart file field"))
}
