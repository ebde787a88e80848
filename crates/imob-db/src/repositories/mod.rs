//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in imob-core.
//! Each repository handles database operations for a specific domain entity.

mod collaborator;
mod error;
mod property;
mod questionnaire;
mod response;
mod user;

pub use collaborator::PgCollaboratorRepository;
pub use property::PgPropertyRepository;
pub use questionnaire::PgQuestionnaireRepository;
pub use response::PgResponseRepository;
pub use user::PgUserRepository;
