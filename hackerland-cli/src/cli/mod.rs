//! Command-line interface orchestration for the hackerland tools.
//!
//! The CLI offers `solve` for one-off answers, `check` for a differential
//! run of the candidate solver against the reference, and `generate` for
//! reproducing a seeded random case.

mod commands;
mod input;
mod report;

pub use commands::{
    BoundsArgs, CheckCommand, Cli, CliError, Command, CommandOutput, GenerateCommand,
    SolveCommand, run_cli,
};
pub use input::{InputError, parse_cases};
pub use report::render_output;
