//! Application configuration value object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service UUID the board peripheral advertises (Nordic UART service)
pub const DEFAULT_SERVICE_UUID: Uuid = uuid::uuid!("6e400001-b5a3-f393-e0a9-e50e24dcca9e");

/// Write characteristic carrying move commands (Nordic UART RX)
pub const DEFAULT_WRITE_CHARACTERISTIC_UUID: Uuid =
    uuid::uuid!("6e400002-b5a3-f393-e0a9-e50e24dcca9e");

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub service_uuid: Option<String>,
    pub write_characteristic_uuid: Option<String>,
    /// Preferred board name; when unset the first discovered board is used
    pub device_name: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            service_uuid: Some(DEFAULT_SERVICE_UUID.to_string()),
            write_characteristic_uuid: Some(DEFAULT_WRITE_CHARACTERISTIC_UUID.to_string()),
            device_name: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            service_uuid: other.service_uuid.or(self.service_uuid),
            write_characteristic_uuid: other
                .write_characteristic_uuid
                .or(self.write_characteristic_uuid),
            device_name: other.device_name.or(self.device_name),
        }
    }

    /// Get the board service UUID, or the built-in default if unset/invalid
    pub fn service_uuid_or_default(&self) -> Uuid {
        self.service_uuid
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SERVICE_UUID)
    }

    /// Get the write characteristic UUID, or the built-in default if
    /// unset/invalid
    pub fn write_characteristic_uuid_or_default(&self) -> Uuid {
        self.write_characteristic_uuid
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_WRITE_CHARACTERISTIC_UUID)
    }

    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(
            config.service_uuid,
            Some("6e400001-b5a3-f393-e0a9-e50e24dcca9e".to_string())
        );
        assert_eq!(
            config.write_characteristic_uuid,
            Some("6e400002-b5a3-f393-e0a9-e50e24dcca9e".to_string())
        );
        assert!(config.device_name.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.service_uuid.is_none());
        assert!(config.write_characteristic_uuid.is_none());
        assert!(config.device_name.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            service_uuid: Some("base".to_string()),
            device_name: Some("Board A".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            service_uuid: Some("other".to_string()),
            device_name: None, // Should not override
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.service_uuid, Some("other".to_string()));
        assert_eq!(merged.device_name, Some("Board A".to_string()));
    }

    #[test]
    fn service_uuid_or_default_parses() {
        let config = AppConfig {
            service_uuid: Some("00000000-0000-0000-0000-0000000000aa".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.service_uuid_or_default(),
            Uuid::from_u128(0xaa)
        );
    }

    #[test]
    fn service_uuid_or_default_falls_back_on_invalid() {
        let config = AppConfig {
            service_uuid: Some("not-a-uuid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.service_uuid_or_default(), DEFAULT_SERVICE_UUID);
    }

    #[test]
    fn write_characteristic_uuid_or_default_falls_back_on_none() {
        let config = AppConfig::empty();
        assert_eq!(
            config.write_characteristic_uuid_or_default(),
            DEFAULT_WRITE_CHARACTERISTIC_UUID
        );
    }
}
