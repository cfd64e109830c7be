use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use std::fmt;

/// A command already printed its failure; the process only needs exit code 1.
#[derive(Debug)]
pub struct ReportedFailure;

impl fmt::Display for ReportedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command reported a failure")
    }
}

impl std::error::Error for ReportedFailure {}

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = roster_runtime::config::resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    if matches!(command, Commands::Tui) {
        logging::init_file(cli.log_level, &data_dir)?;
    } else {
        logging::init_stderr(cli.log_level);
    }

    let ctx = ExecutionContext::new(data_dir, cli.server, cli.format);

    match command {
        Commands::Tui => handlers::tui::handle(&ctx, &runtime()?),
        Commands::Employee { command } => handlers::employee::handle(&ctx, &runtime()?, command),
        Commands::Department { command } => {
            handlers::department::handle(&ctx, &runtime()?, command)
        }
        Commands::Stats => handlers::stats::handle(&ctx, &runtime()?),
        Commands::Config { command } => handlers::config::handle(&ctx, command),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
