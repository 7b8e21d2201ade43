//! Service health module.
//!
//! The health check answers one question: can the service reach its
//! database right now?
//!
//! ```text
//! HealthService → DatabaseProbe (storage layer)
//!      ↓
//! HealthStatus
//! ```

pub mod model;
pub mod service;
pub mod traits;

pub use model::{ComponentStatus, HealthStatus, ServiceStatus};
pub use service::HealthService;
pub use traits::{DatabaseProbe, HealthServiceTrait};
