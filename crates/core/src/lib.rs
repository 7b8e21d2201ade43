//! Goals Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for goals. It is database-agnostic
//! and defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod health;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
