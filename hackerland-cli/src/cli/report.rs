//! Human-readable rendering of command outputs.
//!
//! Everything renders through a caller-supplied [`Write`] so tests and the
//! binary share one code path; the binary wires a buffered stdout.

use std::io::{self, Write};

use hackerland_core::{ComparisonOutcome, HarnessReport, Result as SolveResult, TestCase};

use super::commands::CommandOutput;

/// Renders `output` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hackerland_cli::cli::{CommandOutput, render_output};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut buffer = Vec::new();
/// render_output(&CommandOutput::Costs(vec![16, 12]), &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("Minimum cost: 16"));
/// assert!(text.contains("Minimum cost: 12"));
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Costs(costs) => {
            for cost in costs {
                writeln!(writer, "Minimum cost: {cost}")?;
            }
            Ok(())
        }
        CommandOutput::Report(report) => render_report(report, writer),
        CommandOutput::Case(case) => render_case(case, writer),
    }
}

fn render_report(report: &HarnessReport, mut writer: impl Write) -> io::Result<()> {
    for outcome in report.outcomes() {
        render_outcome(outcome, &mut writer)?;
    }
    writeln!(writer, "passed {} of {}", report.passed_count(), report.total())?;
    for failure in report.failures() {
        writeln!(writer, "FAILED: {}", failure.origin())?;
    }
    Ok(())
}

fn render_outcome(outcome: &ComparisonOutcome, mut writer: impl Write) -> io::Result<()> {
    let case = outcome.case();
    let verdict = if outcome.passed() { "pass" } else { "FAIL" };
    writeln!(
        writer,
        "{}: n={} c_lib={} c_road={} roads={} reference={} candidate={} ... {verdict}",
        outcome.origin(),
        case.cities(),
        case.library_cost(),
        case.road_cost(),
        case.roads().len(),
        describe(outcome.reference()),
        describe(outcome.candidate()),
    )?;
    if !outcome.passed() {
        // Full input tuple so the mismatch can be replayed by hand.
        write!(writer, "  roads:")?;
        for road in case.roads() {
            write!(writer, " ({}, {})", road.left(), road.right())?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn describe(result: &SolveResult<u64>) -> String {
    match result {
        Ok(cost) => cost.to_string(),
        Err(err) => format!("error[{}]", err.code()),
    }
}

fn render_case(case: &TestCase, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "1")?;
    writeln!(
        writer,
        "{} {} {} {}",
        case.cities(),
        case.roads().len(),
        case.library_cost(),
        case.road_cost(),
    )?;
    for road in case.roads() {
        writeln!(writer, "{} {}", road.left(), road.right())?;
    }
    Ok(())
}
