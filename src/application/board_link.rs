//! Board link use case: discovery, connection, and write dispatch
//!
//! `BoardLink` is the single owner of all link state. Radio callbacks are
//! marshalled into [`TransportEvent`]s and fed through [`BoardLink::handle_event`]
//! by one consuming task, so concurrent platform callbacks are serialized
//! against state mutation instead of running reentrantly.

use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::config::{DEFAULT_SERVICE_UUID, DEFAULT_WRITE_CHARACTERISTIC_UUID};
use crate::domain::coordinate;
use crate::domain::link::{
    ConnectionContext, LinkSnapshot, LinkState, PeripheralId, PeripheralRecord, SendFailure,
    SendOutcome,
};

use super::ports::{RadioState, Transport, TransportEvent};

/// Fixed identifiers the board is expected to expose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
    pub service: Uuid,
    pub write_characteristic: Uuid,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE_UUID,
            write_characteristic: DEFAULT_WRITE_CHARACTERISTIC_UUID,
        }
    }
}

/// Transport state machine for one board link.
///
/// Drives an injected [`Transport`] and publishes a read-only
/// [`LinkSnapshot`] through a watch channel after every mutation.
pub struct BoardLink<T: Transport> {
    transport: T,
    config: LinkConfig,
    state: LinkState,
    radio: RadioState,
    discovered: Vec<PeripheralRecord>,
    context: Option<ConnectionContext>,
    connection_status: String,
    detail: String,
    snapshot_tx: watch::Sender<LinkSnapshot>,
}

impl<T: Transport> BoardLink<T> {
    pub fn new(transport: T, config: LinkConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(LinkSnapshot {
            state: LinkState::Idle,
            connection_status: "Not connected".to_string(),
            detail: "waiting".to_string(),
            discovered: Vec::new(),
        });
        Self {
            transport,
            config,
            state: LinkState::Idle,
            radio: RadioState::Unknown,
            discovered: Vec::new(),
            context: None,
            connection_status: "Not connected".to_string(),
            detail: "waiting".to_string(),
            snapshot_tx,
        }
    }

    /// Subscribe to state snapshots. The presentation layer observes the
    /// link through this channel only.
    pub fn watch(&self) -> watch::Receiver<LinkSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn discovered(&self) -> &[PeripheralRecord] {
        &self.discovered
    }

    pub fn connection(&self) -> Option<&ConnectionContext> {
        self.context.as_ref()
    }

    pub fn is_write_ready(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(ConnectionContext::is_write_ready)
    }

    /// Begin scanning for board peripherals. Clears the previously
    /// discovered set. A silent no-op when the radio is not powered on;
    /// that condition is surfaced only through the status snapshot.
    pub async fn start_scanning(&mut self) {
        if !matches!(self.state, LinkState::Idle | LinkState::Disconnected) {
            debug!(state = %self.state, "ignoring start_scanning");
            return;
        }
        if !self.radio.is_powered_on() {
            self.detail = self.radio.status_line().to_string();
            self.publish();
            return;
        }

        self.discovered.clear();
        self.state = LinkState::Scanning;
        self.detail = "Starting scan...".to_string();
        if let Err(e) = self.transport.start_scan().await {
            warn!(error = %e, "scan request failed");
            self.detail = e.to_string();
        }
        self.publish();
    }

    /// Stop scanning. The discovered list is retained.
    pub async fn stop_scanning(&mut self) {
        if self.state != LinkState::Scanning {
            return;
        }
        self.state = LinkState::Idle;
        self.detail = "Stopping scan...".to_string();
        if let Err(e) = self.transport.stop_scan().await {
            self.detail = e.to_string();
        }
        self.publish();
    }

    /// Attempt to connect to a previously discovered peripheral. The
    /// discovered set narrows to just that peripheral once the attempt
    /// begins; the prior list is discarded.
    pub async fn connect(&mut self, id: PeripheralId) {
        let Some(record) = self.discovered.iter().find(|p| p.id == id).cloned() else {
            self.detail = format!("Peripheral {id} is not in the discovered list");
            self.publish();
            return;
        };

        self.discovered = vec![record.clone()];
        self.context = Some(ConnectionContext::new(record));
        self.state = LinkState::Connecting;
        self.connection_status = "Connecting".to_string();
        if let Err(e) = self.transport.connect(id).await {
            self.detail = e.to_string();
        }
        self.publish();
    }

    /// Tear down the connection context and return to idle.
    pub fn reset(&mut self) {
        self.context = None;
        self.state = LinkState::Idle;
        self.connection_status = "Not connected".to_string();
        self.detail = "waiting".to_string();
        self.publish();
    }

    fn selected_id(&self) -> Option<PeripheralId> {
        self.context.as_ref().map(|c| c.selected.id)
    }

    /// Consume one transport event and transition accordingly.
    pub async fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::RadioStateChanged(radio) => {
                self.radio = radio;
                self.detail = radio.status_line().to_string();
            }
            TransportEvent::PeripheralDiscovered {
                id,
                name,
                advertised_services,
            } => {
                let relevant = advertised_services.contains(&self.config.service);
                let known = self.discovered.iter().any(|p| p.id == id);
                if relevant && !known {
                    let record = PeripheralRecord {
                        id,
                        name,
                        advertised_services,
                    };
                    debug!(%id, name = record.display_name(), "discovered board peripheral");
                    self.detail = format!(
                        "Discovered peripheral with board service: {}",
                        record.display_name()
                    );
                    self.discovered.push(record);
                }
            }
            TransportEvent::Connected { id } => {
                if self.selected_id() == Some(id) {
                    self.state = LinkState::Connected;
                    self.connection_status = "Connected".to_string();
                    self.detail = "Connected, discovering services".to_string();
                    if let Err(e) = self.transport.discover_services(id).await {
                        self.detail = e.to_string();
                    }
                }
            }
            TransportEvent::ConnectFailed { id, reason } => {
                if self.selected_id() == Some(id) {
                    warn!(%id, reason, "connect failed");
                    self.context = None;
                    self.state = LinkState::Disconnected;
                    self.connection_status = "Not connected".to_string();
                    self.detail = format!("Connect failed: {reason}");
                }
            }
            TransportEvent::Disconnected { id } => {
                if self.selected_id() == Some(id) {
                    self.context = None;
                    self.state = LinkState::Disconnected;
                    self.connection_status = "Not connected".to_string();
                    self.detail = "Disconnected".to_string();
                }
            }
            TransportEvent::ServicesDiscovered { id, services } => {
                if self.selected_id() == Some(id) {
                    if let Some(ctx) = self.context.as_mut() {
                        ctx.gatt.record_services(services.clone());
                    }
                    // Characteristic discovery is requested for every
                    // returned service, not only the matching one
                    for service in services {
                        if let Err(e) =
                            self.transport.discover_characteristics(id, service).await
                        {
                            self.detail = e.to_string();
                        }
                    }
                }
            }
            TransportEvent::CharacteristicsDiscovered {
                id,
                service,
                characteristics,
            } => {
                if self.selected_id() == Some(id) {
                    if let Some(ctx) = self.context.as_mut() {
                        ctx.gatt
                            .record_characteristics(service, characteristics.clone());
                        if let Some(writable) =
                            characteristics.iter().find(|c| c.writable)
                        {
                            // Unconditional overwrite: with several services
                            // reporting writable characteristics, the last
                            // callback to arrive wins. Preserved as-is; see
                            // DESIGN.md.
                            ctx.resolved_service = Some(service);
                            ctx.write_characteristic = Some(writable.id);
                            debug!(
                                %service,
                                characteristic = %writable.id,
                                "writable characteristic resolved"
                            );
                        }
                    }
                }
            }
            TransportEvent::WriteAcknowledged { characteristic, .. } => {
                debug!(%characteristic, "write acknowledged");
                self.detail = "Write acknowledged".to_string();
            }
            TransportEvent::WriteFailed {
                characteristic,
                reason,
                ..
            } => {
                warn!(%characteristic, reason, "write failed");
                self.detail = format!("Write failed: {reason}");
            }
        }
        self.publish();
    }

    /// Write a move command to the board with response requested.
    ///
    /// Before the write, characteristic discovery is re-issued for every
    /// cached service. The write itself still goes against the current
    /// cache without awaiting those results; the peripheral's characteristic
    /// table is not trusted to be stable between connects, and the
    /// re-discovery race is part of the documented contract (DESIGN.md).
    ///
    /// Validity gating belongs to the caller: `send` writes whatever it is
    /// given and only re-validates afterwards for the status line.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let (id, services, target) = match self.context.as_ref() {
            Some(ctx) if ctx.is_write_ready() => (
                ctx.selected.id,
                ctx.gatt.services().to_vec(),
                ctx.gatt
                    .characteristic(self.config.service, self.config.write_characteristic),
            ),
            _ => {
                self.detail = SendFailure::NotConnected.to_string();
                self.publish();
                return SendOutcome::not_attempted(SendFailure::NotConnected);
            }
        };

        for service in services {
            if let Err(e) = self.transport.discover_characteristics(id, service).await {
                debug!(error = %e, "re-discovery request failed");
            }
        }

        if target.is_none() {
            self.detail = SendFailure::ServiceOrCharacteristicMissing.to_string();
            self.publish();
            return SendOutcome::not_attempted(SendFailure::ServiceOrCharacteristicMissing);
        }

        let outcome = match self
            .transport
            .write(id, self.config.write_characteristic, text.as_bytes())
            .await
        {
            Ok(()) => SendOutcome::sent(),
            Err(e) => {
                self.detail = e.to_string();
                self.publish();
                return SendOutcome::rejected();
            }
        };

        // Independent re-validation, purely for the status line; the write
        // above has already been issued either way
        let verdict = coordinate::validate(text);
        self.detail = if verdict.is_valid {
            format!("Sent valid command: {text}")
        } else {
            format!("Sent invalid command: {text}")
        };
        self.publish();
        outcome
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(LinkSnapshot {
            state: self.state,
            connection_status: self.connection_status.clone(),
            detail: self.detail.clone(),
            discovered: self.discovered.clone(),
        });
    }
}
