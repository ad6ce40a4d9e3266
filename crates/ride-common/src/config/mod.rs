//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, RedisConfig, RevocationBackend, RevocationConfig, ServerConfig,
    MIN_JWT_SECRET_LEN,
};
