//! HTTP handlers, one module per resource

pub mod auth;
pub mod collaborators;
pub mod health;
pub mod properties;
pub mod questionnaires;
pub mod responses;
pub mod users;
