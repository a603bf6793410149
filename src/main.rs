use anyhow::Result;

use world_cup_dashboard::cli::Command;
use world_cup_dashboard::{handle_completions, handle_serve, handle_summary, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Summary => handle_summary(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
