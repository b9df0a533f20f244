//! Waypoint CLI Application
//!
//! Command-line interface for storing roadmap snapshots and comparing them.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaypointMcpServer};
use renderer::TerminalRenderer;
use waypoint_core::{params::ListRoadmaps, Registry, RegistryBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Diff(args)) => cli::diff_files(&renderer, args),
        Some(Roadmap { command }) => {
            Cli::new(open_registry(database_file).await?, renderer)
                .handle_roadmap_command(command)
                .await
        }
        Some(Compare(args)) => {
            Cli::new(open_registry(database_file).await?, renderer)
                .compare(args)
                .await
        }
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            let registry = open_registry(database_file).await?;
            run_stdio_server(WaypointMcpServer::new(registry))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(open_registry(database_file).await?, renderer)
                .list_roadmaps(&ListRoadmaps::default())
                .await
        }
    }
}

async fn open_registry(database_file: Option<PathBuf>) -> Result<Registry> {
    RegistryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize roadmap store")
}
