//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Property not found: {0}")]
    PropertyNotFound(Snowflake),

    #[error("Collaborator not found: {0}")]
    CollaboratorNotFound(Snowflake),

    #[error("Questionnaire not found: {0}")]
    QuestionnaireNotFound(Snowflake),

    #[error("Response not found: {0}")]
    ResponseNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown role label: {0}")]
    InvalidRole(String),

    #[error("Unknown property kind: {0}")]
    InvalidPropertyKind(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PropertyNotFound(_) => "UNKNOWN_PROPERTY",
            Self::CollaboratorNotFound(_) => "UNKNOWN_COLLABORATOR",
            Self::QuestionnaireNotFound(_) => "UNKNOWN_QUESTIONNAIRE",
            Self::ResponseNotFound(_) => "UNKNOWN_RESPONSE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidPropertyKind(_) => "INVALID_PROPERTY_KIND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PropertyNotFound(_)
                | Self::CollaboratorNotFound(_)
                | Self::QuestionnaireNotFound(_)
                | Self::ResponseNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidRole(_) | Self::InvalidPropertyKind(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::EmailAlreadyExists;
        assert_eq!(err.code(), "EMAIL_ALREADY_EXISTS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::ResponseNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidRole("OWNER".to_string()).is_validation());
        assert!(DomainError::InvalidPropertyKind("castelo".to_string()).is_validation());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PropertyNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Property not found: 123");
    }
}
