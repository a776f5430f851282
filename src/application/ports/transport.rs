//! Wireless transport port interface

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::link::{GattCharacteristic, PeripheralId};

/// Transport errors
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Radio is unavailable: {0}")]
    RadioUnavailable(String),

    #[error("Unknown peripheral: {0}")]
    UnknownPeripheral(PeripheralId),

    #[error("Write dispatch failed: {0}")]
    WriteFailed(String),
}

/// Radio power/authorization state, reported by the platform stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioState {
    #[default]
    Unknown,
    PoweredOn,
    PoweredOff,
    Resetting,
    Unauthorized,
    Unsupported,
}

impl RadioState {
    pub const fn is_powered_on(&self) -> bool {
        matches!(self, Self::PoweredOn)
    }

    /// Human-readable status line for the current radio state
    pub const fn status_line(&self) -> &'static str {
        match self {
            Self::PoweredOn => "Radio is powered on and available.",
            Self::PoweredOff => "Radio is powered off.",
            Self::Resetting => "Radio is resetting.",
            Self::Unauthorized => "Radio access is unauthorized.",
            Self::Unsupported => "Radio is not supported on this device.",
            Self::Unknown => "Radio state is unknown.",
        }
    }
}

/// Asynchronous results from the radio. Platform delegate callbacks are
/// marshalled into this single event stream and consumed by one task, so
/// state mutation is never reentrant.
#[derive(Debug, Clone)]
pub enum TransportEvent {
    RadioStateChanged(RadioState),
    PeripheralDiscovered {
        id: PeripheralId,
        name: Option<String>,
        advertised_services: Vec<Uuid>,
    },
    Connected {
        id: PeripheralId,
    },
    ConnectFailed {
        id: PeripheralId,
        reason: String,
    },
    Disconnected {
        id: PeripheralId,
    },
    ServicesDiscovered {
        id: PeripheralId,
        services: Vec<Uuid>,
    },
    CharacteristicsDiscovered {
        id: PeripheralId,
        service: Uuid,
        characteristics: Vec<GattCharacteristic>,
    },
    WriteAcknowledged {
        id: PeripheralId,
        characteristic: Uuid,
    },
    WriteFailed {
        id: PeripheralId,
        characteristic: Uuid,
        reason: String,
    },
}

/// Port for the platform wireless stack. Every operation is fire-and-forget:
/// the `Ok` return means the request was handed to the radio, and results
/// arrive later as [`TransportEvent`]s.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Begin scanning for peripherals.
    async fn start_scan(&self) -> Result<(), TransportError>;

    /// Stop an in-progress scan.
    async fn stop_scan(&self) -> Result<(), TransportError>;

    /// Request a connection to a discovered peripheral.
    async fn connect(&self, id: PeripheralId) -> Result<(), TransportError>;

    /// Request service discovery on a connected peripheral.
    async fn discover_services(&self, id: PeripheralId) -> Result<(), TransportError>;

    /// Request characteristic discovery for one service.
    async fn discover_characteristics(
        &self,
        id: PeripheralId,
        service: Uuid,
    ) -> Result<(), TransportError>;

    /// Write a payload with response requested. The transport-level
    /// acknowledgement arrives later as [`TransportEvent::WriteAcknowledged`].
    async fn write(
        &self,
        id: PeripheralId,
        characteristic: Uuid,
        payload: &[u8],
    ) -> Result<(), TransportError>;
}
