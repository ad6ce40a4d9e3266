//! Readiness probe for backing stores

use async_trait::async_trait;

/// A dependency that the readiness endpoint pings
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Key reported in the readiness `checks` map
    fn name(&self) -> &'static str;

    /// True when the dependency answered
    async fn ping(&self) -> bool;
}
