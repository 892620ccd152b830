use std::process;

use gotree::cli::{Args, Command};
use gotree::error::GotreeError;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(&args);

    let command = Command::from_args(args);
    process::exit(run_command(command));
}

/// Log to stderr; `RUST_LOG` overrides the level picked from the flags
fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

/// Run the command and map failures to an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            err.exit_code()
        }
    }
}

fn report_error(err: &GotreeError) {
    eprintln!("Error: {}", err.user_message());

    if let Some(path) = err.path() {
        eprintln!("Path: {}", path.display());
    }

    if let Some(suggestion) = err.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }

    tracing::debug!(severity = %err.severity(), error = ?err, "scan aborted");
}
