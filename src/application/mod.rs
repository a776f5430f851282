//! Application layer - Use cases and port interfaces
//!
//! Contains the core operations and trait definitions for external
//! system interactions.

pub mod board_link;
pub mod ports;
pub mod voice_input;

// Re-export use cases
pub use board_link::{BoardLink, LinkConfig};
pub use voice_input::{ListenError, VoiceInput};
