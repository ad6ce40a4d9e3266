//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ride_api::{create_app, create_app_state, AppState};
use ride_common::{AppConfig, PasswordService, TokenService};
use ride_core::testing::{InMemoryActorRepository, InMemoryRevokedTokenRepository};
use ride_core::{Driver, Rider};
use ride_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret used by every in-memory test server
pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by in-memory stores
    pub async fn start() -> Result<Self> {
        let config = memory_config()?;
        let state = memory_state(config)?;
        Self::start_with_state(state).await
    }

    /// Start a server against the PostgreSQL named by `DATABASE_URL`
    pub async fn start_with_database() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = AppConfig::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                "API_PORT" => Some("0".to_string()),
                "MIGRATIONS_DIR" => Some(MIGRATIONS_DIR.to_string()),
                _ => None,
            })
        })
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Cookie store on, so the session cookie travels like in a browser
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// A fresh client that shares no cookies with `self.client`
    pub fn bare_client() -> Result<Client> {
        Ok(Client::builder().timeout(Duration::from_secs(10)).build()?)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET using the server's cookie-carrying client
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// GET with an explicit bearer token and no cookies
    pub async fn get_bearer(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::bare_client()?
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// POST a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }
}

/// Configuration for in-memory servers; no environment needed
pub fn memory_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        "API_PORT" => Some("0".to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

fn memory_state(config: AppConfig) -> Result<AppState> {
    let revoked = Arc::new(InMemoryRevokedTokenRepository::new());
    let ctx = ServiceContext::builder()
        .rider_repo(Arc::new(InMemoryActorRepository::<Rider>::new()))
        .driver_repo(Arc::new(InMemoryActorRepository::<Driver>::new()))
        .revoked_tokens(revoked.clone())
        .token_service(Arc::new(TokenService::new(
            &config.auth.jwt_secret,
            config.auth.token_expiry,
        )))
        .password_service(PasswordService::new())
        .health_check(revoked)
        .build()?;
    Ok(AppState::new(ctx, config))
}

/// Whether a database-backed run is possible
pub fn database_available() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() || std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: DATABASE_URL or JWT_SECRET not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
