//! API integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Tests skip silently when the environment is not prepared.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::fixtures::{
    CreatePropertyBody, CreateUserBody, ImportSummaryReply, LoginBody, LoginReply, PropertyReply,
    UserReply,
};
use integration_tests::{check_test_env, TestServer};
use reqwest::StatusCode;

/// Login as the bootstrap administrator
async fn admin_token(server: &TestServer) -> String {
    let admin_email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@admin.com".to_string());
    let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

    let response = server
        .post(
            "/auth/login",
            &LoginBody {
                email: admin_email,
                password: admin_password,
            },
        )
        .await
        .expect("login request");
    assert_eq!(response.status(), StatusCode::OK);

    let reply: LoginReply = response.json().await.expect("login body");
    reply.access_token
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_admin_login_carries_roles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/auth/login",
            &LoginBody {
                email: std::env::var("ADMIN_EMAIL")
                    .unwrap_or_else(|_| "admin@admin.com".to_string()),
                password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reply: LoginReply = response.json().await.unwrap();
    assert_eq!(reply.token_type, "Bearer");
    assert!(reply.expires_in > 0);
    assert!(reply.user.roles.contains(&"ADMIN".to_string()));
}

#[tokio::test]
async fn test_login_with_bad_password_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/auth/login",
            &LoginBody {
                email: "admin@admin.com".to_string(),
                password: "definitely-wrong".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_crud_and_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    // Create
    let body = CreateUserBody::unique();
    let response = server.post_auth("/users", &token, &body).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: UserReply = response.json().await.unwrap();
    assert_eq!(created.email, body.email);
    assert!(!created.is_disabled);

    // Login as the new user
    let response = server
        .post(
            "/auth/login",
            &LoginBody {
                email: body.email.clone(),
                password: body.password.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deactivate, then the default listing hides it
    let response = server
        .client
        .patch(format!(
            "{}/users/{}/deactivate",
            server.base_url(),
            created.id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<UserReply> = server
        .get_auth("/users", &token)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.iter().all(|u| u.id != created.id));

    let all: Vec<UserReply> = server
        .get_auth("/users/all", &token)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let hidden = all.iter().find(|u| u.id == created.id).unwrap();
    assert!(hidden.is_disabled);

    // Single lookup of a disabled user is a 404
    let response = server
        .get_auth(&format!("/users/{}", created.id), &token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Cleanup
    let response = server
        .client
        .delete(format!("{}/users/{}", server.base_url(), created.id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_role_gate_denies_non_admins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;

    // Create a plain user and log in as them
    let body = CreateUserBody::unique();
    server.post_auth("/users", &admin, &body).await.unwrap();

    let reply: LoginReply = server
        .post(
            "/auth/login",
            &LoginBody {
                email: body.email,
                password: body.password,
            },
        )
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // The admin-only listing is forbidden for a USER token
    let response = server.get_auth("/users", &reply.access_token).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn test_property_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let body = CreatePropertyBody::unique();
    let response = server.post_auth("/imobs", &token, &body).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: PropertyReply = response.json().await.unwrap();
    assert_eq!(created.kind, "casa");
    assert_eq!(created.street, body.street);

    let fetched: PropertyReply = server
        .get_auth(&format!("/imobs/{}", created.id), &token)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.id, created.id);

    // Cleanup
    let response = server
        .client
        .delete(format!("{}/imobs/{}", server.base_url(), created.id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ============================================================================
// Bulk import / export
// ============================================================================

#[tokio::test]
async fn test_property_import_and_export_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let sheet = b"tipo,rua,numero,cidade\n\
                  casa,Rua Integracao,77,Belo Horizonte\n\
                  sala,Rua Integracao,78,Contagem\n"
        .to_vec();

    let response = server
        .post_multipart("/imobs/import", &token, "imobs.csv", sheet)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let summary: ImportSummaryReply = response.json().await.unwrap();
    assert_eq!(summary.created + summary.updated, 2);
    assert_eq!(summary.ignored, 0);

    // Export carries the rows back out
    let response = server.get_auth("/imobs/export", &token).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let exported = response.text().await.unwrap();
    assert!(exported.contains("Rua Integracao"));
    assert!(exported.contains("Ativo"));

    // Re-importing the export creates nothing new
    let response = server
        .post_multipart("/imobs/import", &token, "imobs.csv", exported.into_bytes())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let summary: ImportSummaryReply = response.json().await.unwrap();
    assert_eq!(summary.created, 0);
}

#[tokio::test]
async fn test_malformed_import_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .post_multipart(
            "/users/import",
            &token,
            "broken.csv",
            b"name,email\n\"\xff\xfe,broken\n".to_vec(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
