//! Request/response fixtures for integration tests

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static UNIQUE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A process-unique suffix for test data
pub fn unique_suffix() -> u64 {
    let counter = UNIQUE_COUNTER.fetch_add(1, Ordering::SeqCst);
    (u64::from(std::process::id()) << 20) | counter
}

/// Login request body
#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Create user request body
#[derive(Debug, Serialize)]
pub struct CreateUserBody {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
    pub cpf: String,
    pub phone: String,
    pub cargo: String,
}

impl CreateUserBody {
    /// A unique valid user payload
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test_{suffix}@example.com"),
            password: "secret123".to_string(),
            roles: vec!["USER".to_string()],
            cpf: "123.456.789-00".to_string(),
            phone: "31999990000".to_string(),
            cargo: "Corretor".to_string(),
        }
    }
}

/// Login response body
#[derive(Debug, Deserialize)]
pub struct LoginReply {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: SessionUser,
}

/// Identity block in the login response
#[derive(Debug, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

/// User record as returned by the API
#[derive(Debug, Deserialize)]
pub struct UserReply {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub is_disabled: bool,
}

/// Create property request body
#[derive(Debug, Serialize)]
pub struct CreatePropertyBody {
    pub kind: String,
    pub street: String,
    pub number: String,
    pub city: Option<String>,
}

impl CreatePropertyBody {
    /// A unique valid property payload
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            kind: "casa".to_string(),
            street: format!("Rua de Teste {suffix}"),
            number: suffix.to_string(),
            city: Some("Belo Horizonte".to_string()),
        }
    }
}

/// Property record as returned by the API
#[derive(Debug, Deserialize)]
pub struct PropertyReply {
    pub id: String,
    pub kind: String,
    pub street: String,
    pub number: String,
    pub is_disabled: bool,
}

/// Import summary as returned by the API
#[derive(Debug, Deserialize)]
pub struct ImportSummaryReply {
    pub message: String,
    pub created: u64,
    pub updated: u64,
    pub deactivated: u64,
    pub ignored: u64,
}
