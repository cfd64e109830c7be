pub mod config;
pub mod department;
pub mod employee;
pub mod stats;
pub mod tui;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use roster_runtime::{Confirm, FixedAnswer};
use serde::Serialize;

use crate::commands::ReportedFailure;
use crate::context::ExecutionContext;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};

/// Print `result`, then turn an error badge into exit code 1.
fn finish<T>(ctx: &ExecutionContext, result: CommandResultViewModel<T>) -> Result<()>
where
    T: Serialize + CreateView,
{
    ConsoleRenderer::new(ctx.json_mode()).render(&result)?;
    if result.is_error() {
        return Err(ReportedFailure.into());
    }
    Ok(())
}

/// `--yes` answers for the user; otherwise ask on the terminal.
fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalPrompt)
    }
}

/// y/N question on stderr. Declines when stdin is not a terminal.
struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            tracing::debug!("stdin is not a terminal; declining prompt");
            return false;
        }

        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
