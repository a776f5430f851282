//! Wireless link domain: peripherals, connection state, send outcomes

pub mod outcome;
pub mod peripheral;
pub mod state;

pub use outcome::{SendFailure, SendOutcome};
pub use peripheral::{GattCache, GattCharacteristic, PeripheralId, PeripheralRecord};
pub use state::{ConnectionContext, LinkSnapshot, LinkState};
