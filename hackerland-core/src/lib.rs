//! Hackerland core library.
//!
//! Solves the roads-and-libraries cost-minimisation problem and validates a
//! candidate solver against the trusted reference by differential testing:
//! both solvers run over fixed, operator-entered, and seeded random cases,
//! and every divergence is collected for reporting.

mod case;
mod cost;
mod error;
mod generate;
mod graph;
mod harness;
mod solver;

pub use crate::{
    case::{Road, TestCase},
    cost::component_cost,
    error::{GenerateError, GenerateErrorCode, Result, SolveError, SolveErrorCode},
    generate::{CaseGenerator, GeneratorBounds},
    graph::{ComponentId, ComponentPartition},
    harness::{CaseOrigin, CasePool, ComparisonOutcome, Harness, HarnessReport, known_cases},
    solver::{BfsSolver, Solver, UnionFindSolver},
};
