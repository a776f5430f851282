//! Simulated radio adapter
//!
//! Stands in for the platform wireless stack: a scripted set of peripherals
//! answers scan, connect, discovery, and write requests with synchronous
//! events. Used by the CLI demo commands and the integration tests; real
//! radios implement the same [`Transport`] port out of tree.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::application::ports::{RadioState, Transport, TransportError, TransportEvent};
use crate::domain::config::{DEFAULT_SERVICE_UUID, DEFAULT_WRITE_CHARACTERISTIC_UUID};
use crate::domain::link::{GattCharacteristic, PeripheralId};

/// One service in a scripted GATT table
#[derive(Debug, Clone)]
pub struct SimulatedService {
    pub id: Uuid,
    pub characteristics: Vec<GattCharacteristic>,
}

/// Scripted profile for one simulated peripheral
#[derive(Debug, Clone)]
pub struct SimulatedPeripheral {
    pub id: PeripheralId,
    pub name: Option<String>,
    pub advertised_services: Vec<Uuid>,
    pub services: Vec<SimulatedService>,
}

impl SimulatedPeripheral {
    /// A board advertising the given service with a single writable
    /// command characteristic.
    pub fn board(name: &str, service: Uuid, write_characteristic: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.to_string()),
            advertised_services: vec![service],
            services: vec![SimulatedService {
                id: service,
                characteristics: vec![GattCharacteristic {
                    id: write_characteristic,
                    writable: true,
                }],
            }],
        }
    }

    /// A board using the built-in default identifiers
    pub fn default_board(name: &str) -> Self {
        Self::board(name, DEFAULT_SERVICE_UUID, DEFAULT_WRITE_CHARACTERISTIC_UUID)
    }
}

/// One recorded write, for assertions and demo output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub peripheral: PeripheralId,
    pub characteristic: Uuid,
    pub payload: Vec<u8>,
}

/// Scripted transport. Cloning yields a control handle sharing the same
/// event stream and write log.
#[derive(Clone)]
pub struct SimulatedRadio {
    events: mpsc::UnboundedSender<TransportEvent>,
    peripherals: Arc<Vec<SimulatedPeripheral>>,
    written: Arc<Mutex<Vec<WriteRecord>>>,
}

impl SimulatedRadio {
    pub fn new(
        peripherals: Vec<SimulatedPeripheral>,
    ) -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                events,
                peripherals: Arc::new(peripherals),
                written: Arc::new(Mutex::new(Vec::new())),
            },
            receiver,
        )
    }

    pub fn power_on(&self) {
        self.emit(TransportEvent::RadioStateChanged(RadioState::PoweredOn));
    }

    pub fn power_off(&self) {
        self.emit(TransportEvent::RadioStateChanged(RadioState::PoweredOff));
    }

    /// Simulate the peripheral dropping the connection
    pub fn drop_connection(&self, id: PeripheralId) {
        self.emit(TransportEvent::Disconnected { id });
    }

    /// Every payload written so far, in order
    pub fn written(&self) -> Vec<WriteRecord> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn emit(&self, event: TransportEvent) {
        // A dropped receiver just means nobody is listening any more
        let _ = self.events.send(event);
    }

    fn peripheral(&self, id: PeripheralId) -> Option<&SimulatedPeripheral> {
        self.peripherals.iter().find(|p| p.id == id)
    }
}

#[async_trait]
impl Transport for SimulatedRadio {
    async fn start_scan(&self) -> Result<(), TransportError> {
        for peripheral in self.peripherals.iter() {
            self.emit(TransportEvent::PeripheralDiscovered {
                id: peripheral.id,
                name: peripheral.name.clone(),
                advertised_services: peripheral.advertised_services.clone(),
            });
        }
        Ok(())
    }

    async fn stop_scan(&self) -> Result<(), TransportError> {
        Ok(())
    }

    async fn connect(&self, id: PeripheralId) -> Result<(), TransportError> {
        match self.peripheral(id) {
            Some(_) => self.emit(TransportEvent::Connected { id }),
            None => self.emit(TransportEvent::ConnectFailed {
                id,
                reason: "peripheral out of range".to_string(),
            }),
        }
        Ok(())
    }

    async fn discover_services(&self, id: PeripheralId) -> Result<(), TransportError> {
        let peripheral = self
            .peripheral(id)
            .ok_or(TransportError::UnknownPeripheral(id))?;
        self.emit(TransportEvent::ServicesDiscovered {
            id,
            services: peripheral.services.iter().map(|s| s.id).collect(),
        });
        Ok(())
    }

    async fn discover_characteristics(
        &self,
        id: PeripheralId,
        service: Uuid,
    ) -> Result<(), TransportError> {
        let peripheral = self
            .peripheral(id)
            .ok_or(TransportError::UnknownPeripheral(id))?;
        if let Some(found) = peripheral.services.iter().find(|s| s.id == service) {
            self.emit(TransportEvent::CharacteristicsDiscovered {
                id,
                service,
                characteristics: found.characteristics.clone(),
            });
        }
        Ok(())
    }

    async fn write(
        &self,
        id: PeripheralId,
        characteristic: Uuid,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        if self.peripheral(id).is_none() {
            return Err(TransportError::UnknownPeripheral(id));
        }
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(WriteRecord {
                peripheral: id,
                characteristic,
                payload: payload.to_vec(),
            });
        self.emit(TransportEvent::WriteAcknowledged { id, characteristic });
        Ok(())
    }
}
