pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::Dataset;
use crate::services::server::ServerService;
use crate::services::summary::SummaryService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_env_overrides()?;
        let port = port.unwrap_or(config.server.port);
        let dataset = Dataset::load()?;
        let service = ServerService::new(port, config, dataset);
        service.run().await
    })
}

pub fn handle_summary() -> Result<()> {
    let dataset = Dataset::load()?;
    let service = SummaryService::new(dataset);
    service.run(&mut std::io::stdout().lock())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
