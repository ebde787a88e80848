//! Server setup and initialization
//!
//! Provides the main application builder and server runner. All module
//! wiring is explicit construction here; no ambient globals.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use imob_common::{AppConfig, AppError};
use imob_core::SnowflakeGenerator;
use imob_db::{
    create_pool, run_migrations, PgCollaboratorRepository, PgPropertyRepository,
    PgQuestionnaireRepository, PgResponseRepository, PgUserRepository,
};
use imob_service::{
    LogMailer, Mailer, ServiceContextBuilder, SmtpMailer, UserService,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool and apply migrations
    info!("Connecting to PostgreSQL...");
    let db_config = imob_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service
    let jwt_service = Arc::new(imob_common::JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::default());

    // Create the mail relay; fall back to logging when SMTP is unset
    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => Arc::new(
            SmtpMailer::new(smtp).map_err(|e| AppError::Config(e.to_string()))?,
        ),
        None => {
            warn!("SMTP not configured; reset codes will only be logged");
            Arc::new(LogMailer)
        }
    };

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let property_repo = Arc::new(PgPropertyRepository::new(pool.clone()));
    let collaborator_repo = Arc::new(PgCollaboratorRepository::new(pool.clone()));
    let questionnaire_repo = Arc::new(PgQuestionnaireRepository::new(pool.clone()));
    let response_repo = Arc::new(PgResponseRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .property_repo(property_repo)
        .collaborator_repo(collaborator_repo)
        .questionnaire_repo(questionnaire_repo)
        .response_repo(response_repo)
        .mailer(mailer)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .admin_email(config.admin.email.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Startup passes: re-hash legacy credentials, ensure the admin account
    let user_service = UserService::new(&service_context);
    let rehashed = user_service
        .rehash_legacy_passwords()
        .await
        .map_err(AppError::from)?;
    if rehashed > 0 {
        info!(rehashed, "Legacy plaintext passwords migrated");
    }
    user_service
        .ensure_admin(&config.admin.password)
        .await
        .map_err(AppError::from)?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
