//! Route definitions
//!
//! Account routes are mounted under /api/v1; health probes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};
use ride_core::{Driver, Rider};

use crate::handlers::{accounts, health};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(rider_routes()).merge(driver_routes())
}

/// Rider ("user") routes
fn rider_routes() -> Router<AppState> {
    Router::new()
        .route("/register/user", post(accounts::register_rider))
        .route("/login/user", post(accounts::login::<Rider>))
        .route("/user/profile", get(accounts::profile::<Rider>))
        .route("/logout/user", get(accounts::logout))
}

/// Driver ("captain") routes
fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/register/captain", post(accounts::register_driver))
        .route("/login/captain", post(accounts::login::<Driver>))
        .route("/captain/profile", get(accounts::profile::<Driver>))
        .route("/logout/captain", get(accounts::logout))
}
