//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod coordinate;
pub mod error;
pub mod link;

// Re-export common types
pub use config::AppConfig;
pub use coordinate::{validate, BoardCoordinate, ValidationResult};
pub use error::ConfigError;
pub use link::{LinkSnapshot, LinkState, PeripheralRecord, SendFailure, SendOutcome};
