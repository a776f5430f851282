//! Config command handler

use uuid::Uuid;

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "service_uuid" => config.service_uuid = Some(value.to_string()),
        "write_characteristic_uuid" => {
            config.write_characteristic_uuid = Some(value.to_string());
        }
        "device_name" => config.device_name = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "service_uuid" => config.service_uuid,
        "write_characteristic_uuid" => config.write_characteristic_uuid,
        "device_name" => config.device_name,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "service_uuid",
        config.service_uuid.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "write_characteristic_uuid",
        config
            .write_characteristic_uuid
            .as_deref()
            .unwrap_or("(not set)"),
    );
    presenter.key_value(
        "device_name",
        config.device_name.as_deref().unwrap_or("(not set)"),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "service_uuid" | "write_characteristic_uuid" => {
            value
                .parse::<Uuid>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("Invalid UUID '{}': {}", value, e),
                })?;
        }
        _ => {} // device_name accepts any string
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_uuid_valid() {
        assert!(validate_config_value("service_uuid", "6e400001-b5a3-f393-e0a9-e50e24dcca9e")
            .is_ok());
        assert!(validate_config_value(
            "write_characteristic_uuid",
            "6e400002-b5a3-f393-e0a9-e50e24dcca9e"
        )
        .is_ok());
    }

    #[test]
    fn validate_uuid_invalid() {
        assert!(validate_config_value("service_uuid", "not-a-uuid").is_err());
        assert!(validate_config_value("write_characteristic_uuid", "").is_err());
    }

    #[test]
    fn validate_device_name_accepts_anything() {
        assert!(validate_config_value("device_name", "Demo Board").is_ok());
    }
}
