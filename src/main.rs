use anyhow::Result;

use tournament_dashboard::cli::Command;
use tournament_dashboard::{
    handle_completions, handle_export, handle_serve, handle_show, interpret,
};

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
        Command::Show { source } => handle_show(source.as_deref()),
        Command::Export { source, output } => handle_export(source.as_deref(), output.clone()),
        Command::Serve { source, port } => handle_serve(source.as_deref(), *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
