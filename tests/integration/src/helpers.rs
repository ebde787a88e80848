//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use imob_api::{create_app, create_app_state};
use imob_common::AppConfig;
use reqwest::{Client, Response};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check whether the environment is prepared for integration tests
///
/// Tests silently skip when DATABASE_URL or JWT_SECRET is absent.
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").is_ok() && std::env::var("JWT_SECRET").is_ok()
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server from environment configuration
    pub async fn start() -> Result<Self> {
        let config = AppConfig::from_env()?;

        // Create app state
        let state = create_app_state(config).await.map_err(anyhow::Error::new)?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with a JSON body and a bearer token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Upload a file as multipart form data
    pub async fn post_multipart(
        &self,
        path: &str,
        token: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Response> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        Ok(self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?)
    }
}
