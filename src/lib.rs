pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod feed;
pub mod services;
pub mod stats;
pub mod view;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::error;
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::feed::FeedSource;
use crate::services::dashboard::DashboardService;
use crate::services::export::ExportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_show(source: Option<&str>) -> Result<()> {
    let config = AppConfig::new();
    let source = FeedSource::parse(&config.resolve_source(source));
    let runtime = tokio::runtime::Runtime::new()?;
    let dashboard = runtime.block_on(async {
        let service = DashboardService::new(config)?;
        service.run(&source).await.map_err(|e| {
            error!("{}", e);
            anyhow::anyhow!(view::LOAD_FAILED)
        })
    })?;
    print!("{}", view::render_dashboard(&dashboard));
    Ok(())
}

pub fn handle_export(source: Option<&str>, output: PathBuf) -> Result<()> {
    let config = AppConfig::new();
    let source = FeedSource::parse(&config.resolve_source(source));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ExportService::new(source, output, config)?;
        service.run().await
    })
}

pub fn handle_serve(source: Option<&str>, port: u16) -> Result<()> {
    let config = AppConfig::new();
    let source = FeedSource::parse(&config.resolve_source(source));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, source, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
