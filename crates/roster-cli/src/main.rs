use clap::Parser;
use roster::{Cli, ReportedFailure, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Already rendered to stdout; only the exit code is left to report
        if e.downcast_ref::<ReportedFailure>().is_none() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
