//! Background pruning of the revocation list

use std::sync::Arc;
use std::time::Duration;

use ride_core::RevokedTokenRepository;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use super::error::ServiceResult;

/// Periodically deletes revocation entries whose token has expired anyway
pub struct RevocationSweeper {
    repo: Arc<dyn RevokedTokenRepository>,
    interval: Duration,
}

impl RevocationSweeper {
    pub fn new(repo: Arc<dyn RevokedTokenRepository>, interval: Duration) -> Self {
        Self { repo, interval }
    }

    /// Run a single pruning pass
    pub async fn sweep_once(&self) -> ServiceResult<u64> {
        let removed = self.repo.prune_expired().await?;
        if removed > 0 {
            info!(removed, "Pruned expired revoked tokens");
        } else {
            debug!("No expired revoked tokens to prune");
        }
        Ok(removed)
    }

    /// Spawn the sweep loop; failures are logged and the loop keeps going
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Err(e) = self.sweep_once().await {
                    error!(error = %e, "Revocation sweep failed");
                }
            }
        })
    }
}
