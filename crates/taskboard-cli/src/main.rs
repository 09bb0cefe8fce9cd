mod cli;
mod handlers;
mod output;

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use taskboard_api::HttpTaskService;
use taskboard_core::AppConfig;
use taskboard_domain::Board;
use taskboard_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();

    let api_url = cli
        .api_url
        .unwrap_or_else(|| config.effective_api_base_url().to_string());
    let board_id = cli
        .board
        .unwrap_or_else(|| config.effective_board_id().to_string());

    let service = HttpTaskService::new(&api_url)?;

    match cli.command {
        None => {
            let board = Board::new(board_id.clone(), board_id);
            let service = Arc::new(service);
            let (mut app, event_rx, outcome_rx) = App::new(
                board,
                service.clone(),
                service,
                config.generate_descriptions,
            );
            app.run(event_rx, outcome_rx).await?;
        }
        Some(Commands::Columns) => {
            handlers::handle_columns(&service, &board_id).await;
        }
        Some(Commands::Add { title, describe }) => {
            handlers::handle_add(&service, &board_id, &title, describe).await;
        }
        Some(Commands::Move { task_id, column_id }) => {
            handlers::handle_move(&service, &task_id, &column_id).await;
        }
        Some(Commands::Archive) => {
            handlers::handle_archive(&service).await;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
