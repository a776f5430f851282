//! Transport adapters

pub mod simulated;

pub use simulated::{SimulatedPeripheral, SimulatedRadio, SimulatedService, WriteRecord};
