//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; validated ones also implement
//! `Validate` for input validation.

use imob_core::{PropertyKind, Snowflake, UserRole};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Role labels; defaults to USER when absent
    pub roles: Option<Vec<UserRole>>,

    #[validate(length(min = 1, message = "CPF is required"))]
    pub cpf: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Job title is required"))]
    pub cargo: String,
}

/// Update user request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,

    pub roles: Option<Vec<UserRole>>,

    pub cpf: Option<String>,

    pub phone: Option<String>,

    pub cargo: Option<String>,
}

/// Change own password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

/// Forgot password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Reset password request carrying the emailed code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

// ============================================================================
// Property Requests
// ============================================================================

/// Create property request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    pub kind: PropertyKind,

    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, message = "Number is required"))]
    pub number: String,

    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
    pub water_account: Option<String>,
    pub power_account: Option<String>,
    pub owner_id: Option<Snowflake>,
}

/// Update property request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    pub kind: Option<PropertyKind>,

    #[validate(length(min = 1, message = "Street must not be empty"))]
    pub street: Option<String>,

    #[validate(length(min = 1, message = "Number must not be empty"))]
    pub number: Option<String>,

    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
    pub water_account: Option<String>,
    pub power_account: Option<String>,
    pub owner_id: Option<Snowflake>,
}

// ============================================================================
// Collaborator Requests
// ============================================================================

/// Create collaborator request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollaboratorRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

/// Update collaborator request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCollaboratorRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub phone: Option<String>,
}

// ============================================================================
// Questionnaire Requests
// ============================================================================

/// Create questionnaire request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionnaireRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,
}

/// Update questionnaire request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestionnaireRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,
}

// ============================================================================
// Response Requests
// ============================================================================

/// Create survey response request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResponseRequest {
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,

    pub questionnaire_id: Snowflake,
}

/// Update survey response request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateResponseRequest {
    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: Option<String>,

    pub questionnaire_id: Option<Snowflake>,
}
