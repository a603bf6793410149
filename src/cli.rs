use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "world-cup-dashboard", author, version, about = "FIFA World Cup winners dashboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard server
    Serve {
        /// Port number (optional, defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the win table to the terminal
    Summary,
    /// Generate shell completions on stdout
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
