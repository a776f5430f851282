use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voicemove::cli::app::{
    cli_config, load_merged_config, run_listen, run_scan, run_send, run_validate, EXIT_ERROR,
};
use voicemove::cli::config_cmd::handle_config_command;
use voicemove::cli::{Cli, Commands, Presenter};
use voicemove::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut presenter = Presenter::new();
    let board = cli.board.clone();

    let code = match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => 0,
                Err(e) => {
                    presenter.error(&e.to_string());
                    EXIT_ERROR
                }
            }
        }
        Commands::Validate { text } => run_validate(&text, &presenter),
        Commands::Scan { json } => {
            let config = load_merged_config(cli_config(board)).await;
            run_scan(json, &config, &mut presenter).await
        }
        Commands::Send { text } => {
            let config = load_merged_config(cli_config(board)).await;
            run_send(&text, &config, &mut presenter).await
        }
        Commands::Listen { no_send } => {
            let config = load_merged_config(cli_config(board)).await;
            run_listen(no_send, &config, &mut presenter).await
        }
    };

    ExitCode::from(code)
}
