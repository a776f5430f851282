//! Voicemove - voice-driven move entry for a wireless checkerboard
//!
//! Turns spoken checkers moves into validated coordinate commands and
//! delivers them to a board peripheral over a GATT-style wireless link.
//!
//! # Architecture
//!
//! The crate follows a hexagonal (ports and adapters) layout:
//!
//! - `domain` - Coordinate parsing and validation, link state, config
//! - `application` - The board link state machine, voice capture, port traits
//! - `infrastructure` - Adapter implementations of the ports
//! - `cli` - Command-line interface

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
