//! Service context - dependency container for services
//!
//! Holds all repositories, the mail relay, and other dependencies needed by
//! services. Constructed once at startup and passed by reference; there is
//! no ambient global state.

use std::sync::Arc;

use imob_common::auth::JwtService;
use imob_core::traits::{
    CollaboratorRepository, PropertyRepository, QuestionnaireRepository, ResponseRepository,
    UserRepository,
};
use imob_core::SnowflakeGenerator;
use imob_db::PgPool;

use super::mailer::Mailer;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    property_repo: Arc<dyn PropertyRepository>,
    collaborator_repo: Arc<dyn CollaboratorRepository>,
    questionnaire_repo: Arc<dyn QuestionnaireRepository>,
    response_repo: Arc<dyn ResponseRepository>,

    // Outbound mail relay
    mailer: Arc<dyn Mailer>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // The administrator account shielded from bulk deactivation
    admin_email: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        property_repo: Arc<dyn PropertyRepository>,
        collaborator_repo: Arc<dyn CollaboratorRepository>,
        questionnaire_repo: Arc<dyn QuestionnaireRepository>,
        response_repo: Arc<dyn ResponseRepository>,
        mailer: Arc<dyn Mailer>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        admin_email: String,
    ) -> Self {
        Self {
            pool,
            user_repo,
            property_repo,
            collaborator_repo,
            questionnaire_repo,
            response_repo,
            mailer,
            jwt_service,
            snowflake_generator,
            admin_email,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the property repository
    pub fn property_repo(&self) -> &dyn PropertyRepository {
        self.property_repo.as_ref()
    }

    /// Get the collaborator repository
    pub fn collaborator_repo(&self) -> &dyn CollaboratorRepository {
        self.collaborator_repo.as_ref()
    }

    /// Get the questionnaire repository
    pub fn questionnaire_repo(&self) -> &dyn QuestionnaireRepository {
        self.questionnaire_repo.as_ref()
    }

    /// Get the response repository
    pub fn response_repo(&self) -> &dyn ResponseRepository {
        self.response_repo.as_ref()
    }

    /// Get the mail relay
    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the email of the protected administrator account
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> imob_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    property_repo: Option<Arc<dyn PropertyRepository>>,
    collaborator_repo: Option<Arc<dyn CollaboratorRepository>>,
    questionnaire_repo: Option<Arc<dyn QuestionnaireRepository>>,
    response_repo: Option<Arc<dyn ResponseRepository>>,
    mailer: Option<Arc<dyn Mailer>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    admin_email: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn property_repo(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    pub fn collaborator_repo(mut self, repo: Arc<dyn CollaboratorRepository>) -> Self {
        self.collaborator_repo = Some(repo);
        self
    }

    pub fn questionnaire_repo(mut self, repo: Arc<dyn QuestionnaireRepository>) -> Self {
        self.questionnaire_repo = Some(repo);
        self
    }

    pub fn response_repo(mut self, repo: Arc<dyn ResponseRepository>) -> Self {
        self.response_repo = Some(repo);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = Some(email.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.property_repo
                .ok_or_else(|| ServiceError::validation("property_repo is required"))?,
            self.collaborator_repo
                .ok_or_else(|| ServiceError::validation("collaborator_repo is required"))?,
            self.questionnaire_repo
                .ok_or_else(|| ServiceError::validation("questionnaire_repo is required"))?,
            self.response_repo
                .ok_or_else(|| ServiceError::validation("response_repo is required"))?,
            self.mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.admin_email
                .ok_or_else(|| ServiceError::validation("admin_email is required"))?,
        ))
    }
}
