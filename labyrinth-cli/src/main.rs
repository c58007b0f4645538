//! CLI entry point for carving and solving labyrinths.
//!
//! Parses command-line arguments with clap, carves the requested maze,
//! renders it to stdout, and maps errors to a failing exit code. Logging is
//! initialised first so every later step can emit diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use labyrinth_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
    maze::MazeError,
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
        let (code, disjoint_set_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Maze(MazeError::Graph(graph)) => {
                    Some((Some(graph.code()), graph.disjoint_set_code()))
                }
                CliError::Maze(_) => None,
            })
            .unwrap_or((None, None));

        let code_field = code.map(|code| field::display(code.as_str()));
        let disjoint_set_code_field = disjoint_set_code.map(|code| field::display(code.as_str()));

        error!(
            error = %err,
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
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
