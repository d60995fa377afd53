use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "tournament dashboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print fixtures, results, standings and leaderboards
    Show {
        /// Feed file path or http(s) URL (defaults to $DASHBOARD_SOURCE or data.json)
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Write the computed dashboard as JSON
    Export {
        /// Feed file path or http(s) URL
        #[arg(short, long)]
        source: Option<String>,
        /// Output file
        #[arg(short, long, default_value = "dashboard.json")]
        output: PathBuf,
    },
    /// Serve the dashboard as JSON over HTTP
    Serve {
        /// Feed file path or http(s) URL
        #[arg(short, long)]
        source: Option<String>,
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
