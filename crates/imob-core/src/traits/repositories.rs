//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Collaborator, Property, Questionnaire, SurveyResponse, User};
use crate::error::DomainError;
use crate::value_objects::{PropertyKind, Snowflake, UserRole};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, regardless of lifecycle flag
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken (case-insensitive, disabled included)
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List users; disabled records are excluded unless requested
    async fn list(&self, include_disabled: bool) -> RepoResult<Vec<User>>;

    /// List active users holding a given role
    async fn list_by_role(&self, role: UserRole) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields, roles and lifecycle flag
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard-delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    /// Flip the lifecycle flag; NotFound when the id does not resolve
    async fn set_disabled(&self, id: Snowflake, disabled: bool) -> RepoResult<()>;

    /// Disable every user except the protected email; returns affected rows
    async fn disable_all_except(&self, email: &str) -> RepoResult<u64>;

    /// Store a pending reset code and its expiry on the user
    async fn set_reset_code(
        &self,
        id: Snowflake,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Find the user matching (email, code) with an unexpired code
    async fn find_for_reset(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<User>>;

    /// Clear any pending reset code
    async fn clear_reset_code(&self, id: Snowflake) -> RepoResult<()>;

    /// List (id, password hash) pairs for the startup re-hash pass
    async fn list_credentials(&self) -> RepoResult<Vec<(Snowflake, String)>>;
}

// ============================================================================
// Property Repository
// ============================================================================

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find property by ID, regardless of lifecycle flag
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>>;

    /// Find property by its natural key; kind is exact, street/number as stored
    async fn find_by_natural_key(
        &self,
        kind: PropertyKind,
        street: &str,
        number: &str,
    ) -> RepoResult<Option<Property>>;

    /// List properties; disabled records are excluded unless requested
    async fn list(&self, include_disabled: bool) -> RepoResult<Vec<Property>>;

    /// Create a new property
    async fn create(&self, property: &Property) -> RepoResult<()>;

    /// Update an existing property
    async fn update(&self, property: &Property) -> RepoResult<()>;

    /// Hard-delete a property
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Flip the lifecycle flag; NotFound when the id does not resolve
    async fn set_disabled(&self, id: Snowflake, disabled: bool) -> RepoResult<()>;

    /// Disable every property; returns affected rows
    async fn disable_all(&self) -> RepoResult<u64>;
}

// ============================================================================
// Collaborator Repository
// ============================================================================

#[async_trait]
pub trait CollaboratorRepository: Send + Sync {
    /// Find collaborator by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Collaborator>>;

    /// List all collaborators
    async fn list(&self) -> RepoResult<Vec<Collaborator>>;

    /// Create a new collaborator
    async fn create(&self, collaborator: &Collaborator) -> RepoResult<()>;

    /// Update an existing collaborator
    async fn update(&self, collaborator: &Collaborator) -> RepoResult<()>;

    /// Hard-delete a collaborator
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Questionnaire Repository
// ============================================================================

#[async_trait]
pub trait QuestionnaireRepository: Send + Sync {
    /// Find questionnaire by ID, excluding soft-deleted rows
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Questionnaire>>;

    /// List questionnaires, excluding soft-deleted rows
    async fn list(&self) -> RepoResult<Vec<Questionnaire>>;

    /// Create a new questionnaire
    async fn create(&self, questionnaire: &Questionnaire) -> RepoResult<()>;

    /// Update the question text
    async fn update(&self, questionnaire: &Questionnaire) -> RepoResult<()>;

    /// Soft-delete; NotFound when absent or already deleted
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Response Repository
// ============================================================================

#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Find response by ID, excluding soft-deleted rows
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SurveyResponse>>;

    /// List live responses joined with their questionnaire
    async fn list(&self) -> RepoResult<Vec<(SurveyResponse, Option<Questionnaire>)>>;

    /// List live responses for one questionnaire, joined
    async fn list_by_questionnaire(
        &self,
        questionnaire_id: Snowflake,
    ) -> RepoResult<Vec<(SurveyResponse, Option<Questionnaire>)>>;

    /// Create a new response
    async fn create(&self, response: &SurveyResponse) -> RepoResult<()>;

    /// Update the answer text
    async fn update(&self, response: &SurveyResponse) -> RepoResult<()>;

    /// Soft-delete; NotFound when absent or already deleted
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}
