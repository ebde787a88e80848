//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use imob_core::{PropertyKind, UserRole};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the issued token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: SessionUserResponse,
}

impl LoginResponse {
    pub fn new(access_token: String, expires_in: i64, user: SessionUserResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Identity summary embedded in the login response
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<UserRole>,
}

// ============================================================================
// User Responses
// ============================================================================

/// User response (never carries credential material)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<UserRole>,
    pub cpf: String,
    pub phone: String,
    pub cargo: String,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Property Responses
// ============================================================================

/// Property response
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: String,
    pub kind: PropertyKind,
    pub street: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Collaborator Responses
// ============================================================================

/// Collaborator response
#[derive(Debug, Clone, Serialize)]
pub struct CollaboratorResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Questionnaire / Response Responses
// ============================================================================

/// Questionnaire response
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub id: String,
    pub question: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Survey response with its questionnaire resolved
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDetail {
    pub id: String,
    pub answer: String,
    pub questionnaire_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<QuestionnaireResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}
