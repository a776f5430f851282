//! Link state machine states and connection context

use std::fmt;

use uuid::Uuid;

use super::peripheral::{GattCache, PeripheralRecord};

/// Link lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinkState {
    #[default]
    Idle,
    Scanning,
    Connecting,
    Connected,
    Disconnected,
}

impl LinkState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-connection state, exclusively owned by the link state machine.
/// Created when a connect attempt begins, torn down on disconnect or
/// explicit reset.
///
/// Invariant: `write_characteristic` is `Some` only when `resolved_service`
/// is `Some`; both are assigned together when characteristic discovery
/// reports a writable characteristic.
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    pub selected: PeripheralRecord,
    pub gatt: GattCache,
    pub resolved_service: Option<Uuid>,
    pub write_characteristic: Option<Uuid>,
}

impl ConnectionContext {
    pub fn new(selected: PeripheralRecord) -> Self {
        Self {
            selected,
            gatt: GattCache::default(),
            resolved_service: None,
            write_characteristic: None,
        }
    }

    /// True once characteristic discovery has produced a write target
    pub const fn is_write_ready(&self) -> bool {
        self.write_characteristic.is_some()
    }
}

/// Read-only view of the link published to the presentation layer after
/// every state mutation.
#[derive(Debug, Clone, Default)]
pub struct LinkSnapshot {
    pub state: LinkState,
    /// Headline connection status, e.g. "Connected"
    pub connection_status: String,
    /// Most recent event detail line
    pub detail: String,
    pub discovered: Vec<PeripheralRecord>,
}
