//! CLI layer - Command-line interface
//!
//! Contains argument parsing, command handlers, and terminal output.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
