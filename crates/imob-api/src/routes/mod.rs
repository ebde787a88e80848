//! Route definitions
//!
//! All API routes organized by resource, mounted at the root path.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, collaborators, health, properties, questionnaires, responses, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(property_routes())
        .merge(collaborator_routes())
        .merge(questionnaire_routes())
        .merge(response_routes())
}

/// Health check routes (exported separately to bypass auth-oriented layers)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users", get(users::list_users))
        .route("/users/all", get(users::list_all_users))
        .route("/users/role/:role", get(users::list_users_by_role))
        .route("/users/forgot-password", post(users::forgot_password))
        .route("/users/reset-password", post(users::reset_password))
        .route("/users/import", post(users::import_users))
        .route("/users/export", get(users::export_users))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
        .route("/users/:user_id", delete(users::remove_user))
        .route("/users/:user_id/password", put(users::update_user_password))
        .route("/users/:user_id/activate", patch(users::activate_user))
        .route("/users/:user_id/deactivate", patch(users::deactivate_user))
}

/// Property routes
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/imobs", post(properties::create_property))
        .route("/imobs", get(properties::list_properties))
        .route("/imobs/all", get(properties::list_all_properties))
        .route("/imobs/import", post(properties::import_properties))
        .route("/imobs/export", get(properties::export_properties))
        .route("/imobs/:property_id", get(properties::get_property))
        .route("/imobs/:property_id", put(properties::update_property))
        .route("/imobs/:property_id", delete(properties::remove_property))
        .route("/imobs/:property_id/activate", patch(properties::activate_property))
        .route("/imobs/:property_id/deactivate", patch(properties::deactivate_property))
}

/// Collaborator routes
fn collaborator_routes() -> Router<AppState> {
    Router::new()
        .route("/collaborators", post(collaborators::create_collaborator))
        .route("/collaborators", get(collaborators::list_collaborators))
        .route("/collaborators/:collaborator_id", get(collaborators::get_collaborator))
        .route("/collaborators/:collaborator_id", put(collaborators::update_collaborator))
        .route("/collaborators/:collaborator_id", delete(collaborators::remove_collaborator))
}

/// Questionnaire routes
fn questionnaire_routes() -> Router<AppState> {
    Router::new()
        .route("/questionnaires", post(questionnaires::create_questionnaire))
        .route("/questionnaires", get(questionnaires::list_questionnaires))
        .route("/questionnaires/:questionnaire_id", get(questionnaires::get_questionnaire))
        .route("/questionnaires/:questionnaire_id", put(questionnaires::update_questionnaire))
        .route("/questionnaires/:questionnaire_id", delete(questionnaires::remove_questionnaire))
}

/// Survey response routes
fn response_routes() -> Router<AppState> {
    Router::new()
        .route("/responses", post(responses::create_response))
        .route("/responses", get(responses::list_responses))
        .route("/responses/by-question/:questionnaire_id", get(responses::list_responses_by_questionnaire))
        .route("/responses/:response_id", get(responses::get_response))
        .route("/responses/:response_id", put(responses::update_response))
        .route("/responses/:response_id", delete(responses::remove_response))
}
