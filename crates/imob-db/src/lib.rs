//! # imob-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `imob-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCollaboratorRepository, PgPropertyRepository, PgQuestionnaireRepository,
    PgResponseRepository, PgUserRepository,
};
