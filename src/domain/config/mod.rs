//! Configuration value objects

pub mod app_config;

pub use app_config::{AppConfig, DEFAULT_SERVICE_UUID, DEFAULT_WRITE_CHARACTERISTIC_UUID};
