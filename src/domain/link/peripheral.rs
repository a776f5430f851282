//! Discovered peripherals and cached GATT state

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

/// Opaque platform-assigned peripheral identifier
pub type PeripheralId = Uuid;

/// One peripheral seen during a scan, de-duplicated by identifier.
/// Discarded when a new scan begins, except the one actively connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeripheralRecord {
    pub id: PeripheralId,
    pub name: Option<String>,
    pub advertised_services: Vec<Uuid>,
}

impl PeripheralRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn advertises(&self, service: Uuid) -> bool {
        self.advertised_services.contains(&service)
    }
}

/// One characteristic as reported by characteristic discovery. Only the
/// write capability matters to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GattCharacteristic {
    pub id: Uuid,
    pub writable: bool,
}

/// The peripheral's service and characteristic table as last reported by
/// discovery callbacks. Lookups at send time go through this cache, which
/// may lag an in-flight re-discovery.
#[derive(Debug, Clone, Default)]
pub struct GattCache {
    services: Vec<Uuid>,
    characteristics: HashMap<Uuid, Vec<GattCharacteristic>>,
}

impl GattCache {
    /// Replace the cached service list. Characteristics already cached for
    /// services that are still present are retained.
    pub fn record_services(&mut self, services: Vec<Uuid>) {
        self.characteristics.retain(|id, _| services.contains(id));
        self.services = services;
    }

    /// Replace the cached characteristics for one service.
    pub fn record_characteristics(
        &mut self,
        service: Uuid,
        characteristics: Vec<GattCharacteristic>,
    ) {
        self.characteristics.insert(service, characteristics);
    }

    pub fn services(&self) -> &[Uuid] {
        &self.services
    }

    pub fn has_service(&self, service: Uuid) -> bool {
        self.services.contains(&service)
    }

    /// Look up a characteristic under a specific service. Returns `None`
    /// when the service itself is not in the cached list, even if the
    /// characteristic id was reported elsewhere.
    pub fn characteristic(&self, service: Uuid, characteristic: Uuid) -> Option<GattCharacteristic> {
        if !self.has_service(service) {
            return None;
        }
        self.characteristics
            .get(&service)?
            .iter()
            .copied()
            .find(|c| c.id == characteristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn display_name_falls_back_to_unknown() {
        let record = PeripheralRecord {
            id: uuid(1),
            name: None,
            advertised_services: vec![],
        };
        assert_eq!(record.display_name(), "Unknown");
    }

    #[test]
    fn advertises_checks_service_membership() {
        let record = PeripheralRecord {
            id: uuid(1),
            name: Some("Board".into()),
            advertised_services: vec![uuid(10)],
        };
        assert!(record.advertises(uuid(10)));
        assert!(!record.advertises(uuid(11)));
    }

    #[test]
    fn characteristic_lookup_requires_cached_service() {
        let mut cache = GattCache::default();
        cache.record_characteristics(
            uuid(10),
            vec![GattCharacteristic {
                id: uuid(20),
                writable: true,
            }],
        );

        // Characteristics known but the service list was never recorded
        assert!(cache.characteristic(uuid(10), uuid(20)).is_none());

        cache.record_services(vec![uuid(10)]);
        cache.record_characteristics(
            uuid(10),
            vec![GattCharacteristic {
                id: uuid(20),
                writable: true,
            }],
        );
        assert!(cache.characteristic(uuid(10), uuid(20)).is_some());
    }

    #[test]
    fn record_services_drops_stale_characteristics() {
        let mut cache = GattCache::default();
        cache.record_services(vec![uuid(10)]);
        cache.record_characteristics(
            uuid(10),
            vec![GattCharacteristic {
                id: uuid(20),
                writable: false,
            }],
        );

        cache.record_services(vec![uuid(11)]);
        assert!(!cache.has_service(uuid(10)));
        assert!(cache.characteristic(uuid(10), uuid(20)).is_none());
    }

    #[test]
    fn characteristic_lookup_by_id() {
        let mut cache = GattCache::default();
        cache.record_services(vec![uuid(10)]);
        cache.record_characteristics(
            uuid(10),
            vec![
                GattCharacteristic {
                    id: uuid(20),
                    writable: false,
                },
                GattCharacteristic {
                    id: uuid(21),
                    writable: true,
                },
            ],
        );

        let found = cache.characteristic(uuid(10), uuid(21)).unwrap();
        assert!(found.writable);
        assert!(cache.characteristic(uuid(10), uuid(22)).is_none());
    }
}
