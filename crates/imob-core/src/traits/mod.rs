//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    CollaboratorRepository, PropertyRepository, QuestionnaireRepository, RepoResult,
    ResponseRepository, UserRepository,
};
