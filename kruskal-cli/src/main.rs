//! CLI entry point for the kruskal minimum spanning forest builder.
//!
//! Parses command-line arguments with clap, builds the forest, renders the
//! summary to stdout, and maps errors to appropriate exit codes. Logging is
//! initialised eagerly so every later step can emit structured diagnostics
//! via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use kruskal_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.map(CliError::code);
        let disjoint_set_code = cli_error.and_then(|cli_error| match cli_error {
            CliError::Core(core) => core.disjoint_set_code(),
            _ => None,
        });

        let code_field = code.map(field::display);
        let disjoint_set_code_field = disjoint_set_code.map(|code| field::display(code.as_str()));
        let message = format!("{err:#}");

        error!(
            error = message.as_str(),
            code = code_field,
            disjoint_set_code = disjoint_set_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
