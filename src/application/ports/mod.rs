//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod speech;
pub mod transport;

// Re-export common types
pub use config::ConfigStore;
pub use speech::{AuthorizationStatus, SpeechError, SpeechEvent, SpeechSource};
pub use transport::{RadioState, Transport, TransportError, TransportEvent};
