//! Health service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use super::model::HealthStatus;
use super::traits::{DatabaseProbe, HealthServiceTrait};

pub struct HealthService {
    probe: Arc<dyn DatabaseProbe>,
}

impl HealthService {
    pub fn new(probe: Arc<dyn DatabaseProbe>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> HealthStatus {
        match self.probe.ping().await {
            Ok(()) => HealthStatus::healthy(),
            Err(e) => {
                warn!("Database health probe failed: {}", e);
                HealthStatus::database_down(e.to_string())
            }
        }
    }
}
