//! Main app runners for the validate/scan/send/listen commands

use std::env;

use tokio::sync::mpsc;

use crate::application::ports::{ConfigStore, TransportEvent};
use crate::application::{BoardLink, LinkConfig, VoiceInput};
use crate::domain::config::AppConfig;
use crate::domain::coordinate;
use crate::domain::link::PeripheralId;
use crate::infrastructure::{SimulatedPeripheral, SimulatedRadio, StdinSpeech, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        device_name: env::var("VOICEMOVE_BOARD").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Validate a transcript and report the verdict
pub fn run_validate(text: &str, presenter: &Presenter) -> u8 {
    match coordinate::coordinates(text) {
        Some(coords) => {
            let rendered: Vec<String> = coords.iter().map(ToString::to_string).collect();
            presenter.output(&format!("valid: {}", rendered.join(" ")));
            EXIT_SUCCESS
        }
        None => {
            presenter.error(&format!("Invalid input: \"{}\"", text));
            EXIT_ERROR
        }
    }
}

/// A board link wired to the simulated radio, with its event stream
struct DemoLink {
    link: BoardLink<SimulatedRadio>,
    control: SimulatedRadio,
    events: mpsc::UnboundedReceiver<TransportEvent>,
}

impl DemoLink {
    fn new(config: &AppConfig) -> Self {
        let service = config.service_uuid_or_default();
        let write_characteristic = config.write_characteristic_uuid_or_default();
        let (radio, events) = SimulatedRadio::new(vec![SimulatedPeripheral::board(
            "Demo Board",
            service,
            write_characteristic,
        )]);
        let control = radio.clone();
        let link = BoardLink::new(
            radio,
            LinkConfig {
                service,
                write_characteristic,
            },
        );
        Self {
            link,
            control,
            events,
        }
    }

    /// Feed every queued radio event through the state machine
    async fn drain(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.link.handle_event(event).await;
        }
    }

    /// Power on, scan, connect, and resolve the write characteristic
    async fn bring_up(&mut self, board: Option<&str>) -> Result<PeripheralId, String> {
        self.control.power_on();
        self.drain().await;
        self.link.start_scanning().await;
        self.drain().await;

        let target = match board {
            Some(name) => self
                .link
                .discovered()
                .iter()
                .find(|p| p.display_name() == name),
            None => self.link.discovered().first(),
        }
        .map(|p| p.id)
        .ok_or_else(|| match board {
            Some(name) => format!("No board named \"{}\" found", name),
            None => "No board peripherals found".to_string(),
        })?;

        self.link.stop_scanning().await;
        self.link.connect(target).await;
        self.drain().await;

        if !self.link.is_write_ready() {
            return Err("Board did not expose a writable command characteristic".to_string());
        }
        Ok(target)
    }
}

/// Scan for boards and list them
pub async fn run_scan(json: bool, config: &AppConfig, presenter: &mut Presenter) -> u8 {
    let mut demo = DemoLink::new(config);
    demo.control.power_on();
    demo.drain().await;
    demo.link.start_scanning().await;
    demo.drain().await;
    demo.link.stop_scanning().await;

    let discovered = demo.link.discovered().to_vec();
    if json {
        match serde_json::to_string_pretty(&discovered) {
            Ok(out) => presenter.output(&out),
            Err(e) => {
                presenter.error(&e.to_string());
                return EXIT_ERROR;
            }
        }
    } else if discovered.is_empty() {
        presenter.warn("No board peripherals found");
    } else {
        for peripheral in &discovered {
            presenter.output(&format!("{}  {}", peripheral.id, peripheral.display_name()));
        }
    }
    EXIT_SUCCESS
}

/// Validate a command and write it to the board.
///
/// The validity gate lives here, not in the link: only a transcript that
/// passes validation may reach `send`.
pub async fn run_send(text: &str, config: &AppConfig, presenter: &mut Presenter) -> u8 {
    let verdict = coordinate::validate(text);
    if !verdict.is_valid {
        presenter.error(&format!(
            "Invalid command \"{}\": not a coordinate sequence",
            text
        ));
        return EXIT_USAGE_ERROR;
    }

    let mut demo = DemoLink::new(config);
    presenter.start_spinner("Connecting to board...");
    match demo.bring_up(config.device_name()).await {
        Ok(_) => presenter.spinner_success("Connected"),
        Err(e) => {
            presenter.spinner_fail(&e);
            return EXIT_ERROR;
        }
    }

    let outcome = demo.link.send(text).await;
    demo.drain().await;

    if outcome.accepted {
        presenter.success(&format!("Sent \"{}\" to the board", text));
        presenter.link_status(&demo.link.watch().borrow());
        presenter.output(text);
        EXIT_SUCCESS
    } else {
        let reason = outcome
            .failure
            .map(|f| f.to_string())
            .unwrap_or_else(|| "unknown failure".to_string());
        presenter.error(&format!("Send failed: {}", reason));
        EXIT_ERROR
    }
}

/// Capture one spoken command and optionally send it
pub async fn run_listen(no_send: bool, config: &AppConfig, presenter: &mut Presenter) -> u8 {
    let mut input = VoiceInput::new(StdinSpeech::new());
    presenter.info("Say a move (type it and press Enter):");

    let captured = match input.run_session().await {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&e.to_string());
            return EXIT_ERROR;
        }
    };

    let Some(text) = captured else {
        presenter.error("No valid command captured");
        return EXIT_ERROR;
    };

    presenter.success(&format!("Recognized valid input: {}", text));
    if no_send {
        presenter.output(&text);
        return EXIT_SUCCESS;
    }
    run_send(&text, config, presenter).await
}

/// Build the CLI-level config overlay
pub fn cli_config(board: Option<String>) -> AppConfig {
    AppConfig {
        device_name: board,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_link_brings_up_default_board() {
        let config = AppConfig::defaults();
        let mut demo = DemoLink::new(&config);
        demo.bring_up(None).await.unwrap();
        assert!(demo.link.is_write_ready());
    }

    #[tokio::test]
    async fn demo_link_rejects_unknown_board_name() {
        let config = AppConfig::defaults();
        let mut demo = DemoLink::new(&config);
        let err = demo.bring_up(Some("Other Board")).await.unwrap_err();
        assert!(err.contains("Other Board"));
    }

    #[tokio::test]
    async fn send_records_payload_on_radio() {
        let config = AppConfig::defaults();
        let mut demo = DemoLink::new(&config);
        demo.bring_up(None).await.unwrap();

        let outcome = demo.link.send("A3B5").await;
        assert!(outcome.accepted);
        let written = demo.control.written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].payload, b"A3B5");
    }
}
