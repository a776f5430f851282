//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// Voicemove - spoken checkerboard moves over a wireless board link
#[derive(Parser, Debug)]
#[command(name = "voicemove")]
#[command(version)]
#[command(about = "Validate spoken checkerboard coordinates and send them to a board peripheral")]
#[command(long_about = None)]
pub struct Cli {
    /// Board name to connect to (default: first discovered board)
    #[arg(short = 'b', long, value_name = "NAME", global = true)]
    pub board: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether text parses as checkerboard coordinates
    Validate {
        /// Raw transcript, e.g. "A3 B5" or "a3b5"
        text: String,
    },
    /// Scan for board peripherals and list them
    Scan {
        /// Emit the discovered list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a move command and write it to the board
    Send {
        /// The move command to transmit
        text: String,
    },
    /// Capture one spoken command (read from stdin) and send it if valid
    Listen {
        /// Validate and print the command without writing to the board
        #[arg(long)]
        no_send: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] =
    &["service_uuid", "write_characteristic_uuid", "device_name"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_validate() {
        let cli = Cli::parse_from(["voicemove", "validate", "A3 B5"]);
        assert!(matches!(cli.command, Commands::Validate { text } if text == "A3 B5"));
    }

    #[test]
    fn cli_parses_send_with_board() {
        let cli = Cli::parse_from(["voicemove", "-b", "Demo Board", "send", "A3"]);
        assert_eq!(cli.board, Some("Demo Board".to_string()));
        assert!(matches!(cli.command, Commands::Send { text } if text == "A3"));
    }

    #[test]
    fn cli_parses_scan_json() {
        let cli = Cli::parse_from(["voicemove", "scan", "--json"]);
        assert!(matches!(cli.command, Commands::Scan { json: true }));
    }

    #[test]
    fn cli_parses_listen_no_send() {
        let cli = Cli::parse_from(["voicemove", "listen", "--no-send"]);
        assert!(matches!(cli.command, Commands::Listen { no_send: true }));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["voicemove", "config", "set", "device_name", "Demo"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "device_name");
            assert_eq!(value, "Demo");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("service_uuid"));
        assert!(is_valid_config_key("write_characteristic_uuid"));
        assert!(is_valid_config_key("device_name"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
