mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use corkboard_core::AppConfig;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CORKBOARD_DEBUG_LOG") {
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
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let root = cli
        .root
        .map(PathBuf::from)
        .unwrap_or_else(|| AppConfig::load().effective_data_dir());
    let mut ctx = CliContext::load(&root).await?;

    match cli.command {
        Commands::Board(board_cmd) => {
            handlers::board::handle(&mut ctx, board_cmd.action).await?;
        }
        Commands::Column(column_cmd) => {
            handlers::column::handle(&mut ctx, column_cmd.action).await?;
        }
        Commands::Task(task_cmd) => {
            handlers::task::handle(&mut ctx, task_cmd.action).await?;
        }
        Commands::Move(args) => {
            handlers::moves::handle(&mut ctx, args).await?;
        }
        Commands::Workspace(workspace_cmd) => {
            handlers::workspace::handle(&mut ctx, workspace_cmd.action).await?;
        }
        Commands::Template(template_cmd) => {
            handlers::template::handle(&mut ctx, template_cmd.action).await?;
        }
        Commands::Import(args) => {
            handlers::board::handle_import(&mut ctx, args).await?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
