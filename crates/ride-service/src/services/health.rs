//! Readiness reporting

use tracing::warn;

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Liveness and readiness probes
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Ping every registered backing store
    pub async fn readiness(&self) -> ReadinessResponse {
        let mut results = Vec::with_capacity(self.ctx.health_checks().len());
        for check in self.ctx.health_checks() {
            let ok = check.ping().await;
            if !ok {
                warn!(check = check.name(), "Readiness check failed");
            }
            results.push((check.name(), ok));
        }
        ReadinessResponse::from_checks(results)
    }
}
