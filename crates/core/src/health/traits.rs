//! Health traits.

use async_trait::async_trait;

use super::model::HealthStatus;
use crate::errors::Result;

/// Checks that the database answers a trivial query.
///
/// Implemented by the storage layer.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Runs a round-trip query on a live connection.
    async fn ping(&self) -> Result<()>;
}

/// Trait for the health service.
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Probes every dependency and aggregates the result.
    ///
    /// Never fails; failures are reported inside the returned status.
    async fn check(&self) -> HealthStatus;
}
