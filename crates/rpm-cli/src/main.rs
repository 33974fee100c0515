//! rpmgen CLI Application
//!
//! Command-line interface and MCP server for generating Rencana Pembelajaran
//! Mendalam lesson plans.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, RpmMcpServer};
use renderer::TerminalRenderer;
use rpm_core::GeneratorBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("rpmgen started");

    let cli = Cli::new(config.clone(), renderer);
    match command {
        Some(Generate(args)) => cli.generate(args).await,
        Some(Prompt(args)) => cli.prompt(args),
        Some(Schema) => cli.schema(),
        Some(Template(args)) => cli.template(args),
        Some(Serve) => {
            let generator = GeneratorBuilder::new()
                .with_config_path(config)
                .build()
                .context("Failed to initialize generator")?;
            info!("Starting rpmgen MCP server");
            run_stdio_server(RpmMcpServer::new(generator))
                .await
                .context("MCP server failed")
        }
        Some(Options) | None => cli.options(),
    }
}
