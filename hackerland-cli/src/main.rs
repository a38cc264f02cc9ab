//! CLI entry point for the hackerland differential solver tools.
//!
//! Parses command-line arguments with clap, executes the selected command,
//! renders its output to stdout, and maps errors to appropriate exit codes.
//! Logging is initialized eagerly so subsequent operations can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hackerland_cli::{
    cli::{Cli, CliError, CommandOutput, render_output, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the output, and flush
/// the output stream. A completed `check` run with mismatches is not an
/// error; it renders fully and surfaces as a failing exit code.
fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let output = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_output(&output, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;

    let all_passed = match &output {
        CommandOutput::Report(report) => report.all_passed(),
        CommandOutput::Costs(_) | CommandOutput::Case(_) => true,
    };
    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(code) => code,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().and_then(|cli_error| {
                match cli_error {
                    CliError::Solve(solve) => Some(solve.code().as_str()),
                    CliError::Generate(generate) => Some(generate.code().as_str()),
                    _ => None,
                }
            });
            let code_field = code.map(field::display);

            error!(error = %err, code = code_field, "command execution failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
