//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces. The in-tree
//! transport and speech adapters are simulations; real radios and speech
//! engines implement the same ports outside this crate.

pub mod config;
pub mod speech;
pub mod transport;

// Re-export adapters
pub use config::XdgConfigStore;
pub use speech::StdinSpeech;
pub use transport::{SimulatedPeripheral, SimulatedRadio, SimulatedService, WriteRecord};
