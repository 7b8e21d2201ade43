//! Health domain types.

use serde::{Deserialize, Serialize};

/// Overall status of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

/// Status of a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
}

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub database: ComponentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: ServiceStatus::Ok,
            database: ComponentStatus::Up,
            error: None,
        }
    }

    pub fn database_down(reason: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            database: ComponentStatus::Down,
            error: Some(reason.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Ok
    }
}
