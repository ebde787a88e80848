//! # imob-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CollaboratorResponse, CreateCollaboratorRequest, CreatePropertyRequest,
    CreateQuestionnaireRequest, CreateResponseRequest, CreateUserRequest, ForgotPasswordRequest,
    HealthResponse, LoginRequest, LoginResponse, PropertyResponse, QuestionnaireResponse,
    ReadinessResponse, ResetPasswordRequest, ResponseDetail, SessionUserResponse,
    UpdateCollaboratorRequest, UpdatePasswordRequest, UpdatePropertyRequest,
    UpdateQuestionnaireRequest, UpdateResponseRequest, UpdateUserRequest, UserResponse,
};
pub use services::{
    AuthService, CollaboratorService, ImportSummary, LogMailer, Mailer, MailerError,
    PropertyService, QuestionnaireService, ResponseService, RowDetail, RowStatus, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SmtpMailer, UserService,
};
