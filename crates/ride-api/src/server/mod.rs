//! Server setup and initialization
//!
//! Wires configuration into stores, services and the router, then serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use ride_cache::{RedisPool, RedisRevokedTokenStore};
use ride_common::{AppConfig, AppError, PasswordService, RevocationBackend, TokenService};
use ride_core::{HealthCheck, RevokedTokenRepository};
use ride_db::{
    create_pool, run_migrations, PgDriverRepository, PgHealthCheck, PgPool, PgRevokedTokenRepository,
    PgRiderRepository, PoolConfig,
};
use ride_service::{RevocationSweeper, ServiceContext};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes skip the rate limiter.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api
        .merge(apply_middleware(health_routes()))
        .with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
    }

    let (revoked_tokens, revocation_health) = revocation_store(&config, &pool)?;

    let token_service = Arc::new(TokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiry,
    ));

    let mut builder = ServiceContext::builder()
        .rider_repo(Arc::new(PgRiderRepository::new(pool.clone())))
        .driver_repo(Arc::new(PgDriverRepository::new(pool.clone())))
        .revoked_tokens(revoked_tokens)
        .token_service(token_service)
        .password_service(PasswordService::new())
        .health_check(Arc::new(PgHealthCheck::new(pool)));
    if let Some(check) = revocation_health {
        builder = builder.health_check(check);
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Pick the revocation list backend; Redis adds its own readiness probe
fn revocation_store(
    config: &AppConfig,
    pool: &PgPool,
) -> Result<(Arc<dyn RevokedTokenRepository>, Option<Arc<dyn HealthCheck>>), AppError> {
    match config.revocation.backend {
        RevocationBackend::Postgres => {
            info!("Revocation list stored in PostgreSQL");
            let store: Arc<dyn RevokedTokenRepository> =
                Arc::new(PgRevokedTokenRepository::new(pool.clone()));
            Ok((store, None))
        }
        RevocationBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .ok_or_else(|| AppError::Config("REDIS_URL is required".to_string()))?;
            let redis_pool = RedisPool::from_config(redis)
                .map_err(|e| AppError::Cache(e.to_string()))?;
            info!("Revocation list stored in Redis");
            let store: Arc<dyn RevokedTokenRepository> =
                Arc::new(RedisRevokedTokenStore::new(redis_pool.clone()));
            let check: Arc<dyn HealthCheck> = Arc::new(redis_pool);
            Ok((store, Some(check)))
        }
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address: {e}")))?;

    // Redis entries expire on their own
    let sweep_interval = match config.revocation.backend {
        RevocationBackend::Postgres => config.revocation.sweep_interval(),
        RevocationBackend::Redis => None,
    };

    let state = create_app_state(config).await?;

    if let Some(interval) = sweep_interval {
        RevocationSweeper::new(state.service_context().revoked_tokens_handle(), interval).spawn();
        info!(interval_secs = interval.as_secs(), "Revocation sweeper started");
    }

    let app = create_app(state)?;

    run_server(app, addr).await
}
