//! Command execution for the hackerland CLI.
//!
//! `solve` runs the reference solver over cases read from a file or stdin,
//! `check` runs the differential harness over built-in, operator-entered,
//! and seeded cases, and `generate` emits one reproducible case in the same
//! text format `solve` and `check` consume.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hackerland_core::{
    BfsSolver, CaseGenerator, CasePool, GenerateError, GeneratorBounds, Harness, HarnessReport,
    SolveError, Solver, TestCase, UnionFindSolver,
};
use thiserror::Error;

use super::input::{InputError, parse_cases};

const DEFAULT_SEED_START: u64 = 1;
const DEFAULT_SEED_COUNT: u64 = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hackerland",
    about = "Solve and differentially validate the roads-and-libraries problem."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve cases with the reference solver.
    Solve(SolveCommand),
    /// Compare the candidate solver against the reference over a case pool.
    Check(CheckCommand),
    /// Emit one reproducible random case.
    Generate(GenerateCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Case file in judge format; `-` or omitted reads stdin.
    pub input: Option<PathBuf>,
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Operator case file in judge format; `-` reads stdin; omitted means
    /// no operator cases.
    pub input: Option<PathBuf>,

    /// First seed handed to the case generator.
    #[arg(long = "seed-start", default_value_t = DEFAULT_SEED_START)]
    pub seed_start: u64,

    /// Number of consecutive seeds to evaluate.
    #[arg(long = "seed-count", default_value_t = DEFAULT_SEED_COUNT)]
    pub seed_count: u64,

    /// Generator sampling bounds.
    #[command(flatten)]
    pub bounds: BoundsArgs,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Seed to generate from; the same seed always yields the same case.
    #[arg(long)]
    pub seed: u64,

    /// Generator sampling bounds.
    #[command(flatten)]
    pub bounds: BoundsArgs,
}

/// Inclusive generator bounds, defaulting to the classic suite ranges.
#[derive(Debug, Args, Clone)]
pub struct BoundsArgs {
    /// Minimum number of cities.
    #[arg(long = "min-cities", default_value_t = 2)]
    pub min_cities: u32,

    /// Maximum number of cities.
    #[arg(long = "max-cities", default_value_t = 100)]
    pub max_cities: u32,

    /// Minimum library cost.
    #[arg(long = "min-library-cost", default_value_t = 1)]
    pub min_library_cost: u64,

    /// Maximum library cost.
    #[arg(long = "max-library-cost", default_value_t = 100)]
    pub max_library_cost: u64,

    /// Minimum road cost.
    #[arg(long = "min-road-cost", default_value_t = 1)]
    pub min_road_cost: u64,

    /// Maximum road cost.
    #[arg(long = "max-road-cost", default_value_t = 100)]
    pub max_road_cost: u64,
}

impl BoundsArgs {
    fn to_bounds(&self) -> Result<GeneratorBounds, GenerateError> {
        GeneratorBounds::new(
            self.min_cities..=self.max_cities,
            self.min_library_cost..=self.max_library_cost,
            self.min_road_cost..=self.max_road_cost,
        )
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Case parsing failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Solving failed.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Case generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// What a CLI command produced, ready for rendering.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Minimum costs, one per solved case in input order.
    Costs(Vec<u64>),
    /// Differential harness report.
    Report(HarnessReport),
    /// A generated case.
    Case(TestCase),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when input loading, parsing, solving, or generation
/// fails. Solver mismatches are not errors; they are carried in the
/// returned report.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hackerland_cli::cli::{Cli, CommandOutput, run_cli};
/// # use clap::Parser;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["hackerland", "check", "--seed-count", "3"])?;
/// let output = run_cli(cli)?;
/// let CommandOutput::Report(report) = output else {
///     panic!("check must produce a report");
/// };
/// assert_eq!(report.total(), 5);
/// assert!(report.all_passed());
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    match cli.command {
        Command::Solve(command) => run_solve(&command),
        Command::Check(command) => run_check(&command),
        Command::Generate(command) => run_generate(&command),
    }
}

fn run_solve(command: &SolveCommand) -> Result<CommandOutput, CliError> {
    let cases = read_cases(command.input.as_deref())?;
    let solver = BfsSolver;
    let mut costs = Vec::with_capacity(cases.len());
    for case in &cases {
        costs.push(solver.solve(case)?);
    }
    Ok(CommandOutput::Costs(costs))
}

fn run_check(command: &CheckCommand) -> Result<CommandOutput, CliError> {
    let mut pool = CasePool::with_known_cases();
    if command.input.is_some() {
        for case in read_cases(command.input.as_deref())? {
            pool.push_operator(case);
        }
    }
    pool.set_seed_range(command.seed_start, command.seed_count);

    let generator = CaseGenerator::new(command.bounds.to_bounds()?);
    let harness = Harness::new(BfsSolver, UnionFindSolver, generator);
    let report = harness.run(&pool)?;
    Ok(CommandOutput::Report(report))
}

fn run_generate(command: &GenerateCommand) -> Result<CommandOutput, CliError> {
    let generator = CaseGenerator::new(command.bounds.to_bounds()?);
    let case = generator.generate(command.seed)?;
    Ok(CommandOutput::Case(case))
}

fn read_cases(input: Option<&Path>) -> Result<Vec<TestCase>, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(parse_cases(BufReader::new(file))?)
        }
        _ => {
            let stdin = io::stdin();
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(parse_cases(text.as_bytes())?)
        }
    }
}
