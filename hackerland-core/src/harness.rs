//! Differential harness comparing the reference and candidate solvers.
//!
//! A [`CasePool`] gathers fixed cases, operator-entered cases, and a seed
//! list for generated cases. [`Harness::run`] evaluates both solvers over
//! the whole pool in a fixed order and collects one [`ComparisonOutcome`]
//! per case; mismatches are recorded and logged, never fatal, so a single
//! bad case cannot hide later ones.

use std::fmt;

use tracing::{instrument, warn};

use crate::{
    case::{Road, TestCase},
    error::{self, GenerateError},
    generate::CaseGenerator,
    solver::Solver,
};

/// The two worked examples shipped with the harness.
///
/// `n=7, c_lib=3, c_road=2` over two components costs 16, and
/// `n=6, c_lib=2, c_road=5` costs 12.
#[must_use]
pub fn known_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            7,
            3,
            2,
            [(1, 2), (2, 3), (3, 1), (4, 1), (5, 6), (6, 7)]
                .map(Road::from)
                .to_vec(),
        ),
        TestCase::new(
            6,
            2,
            5,
            [(1, 3), (3, 4), (2, 4), (1, 2), (2, 3), (5, 6)]
                .map(Road::from)
                .to_vec(),
        ),
    ]
}

/// The pool of cases one harness run evaluates.
///
/// Operator-entered cases are explicit, append-only state for the duration
/// of a run; nothing global accumulates between runs.
///
/// # Examples
/// ```
/// use hackerland_core::{CasePool, Road, TestCase};
///
/// let mut pool = CasePool::with_known_cases();
/// pool.push_operator(TestCase::new(2, 1, 1, vec![Road::new(1, 2)]));
/// pool.set_seed_range(1, 10);
/// assert_eq!(pool.fixed().len(), 2);
/// assert_eq!(pool.seeds(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasePool {
    fixed: Vec<TestCase>,
    operator: Vec<TestCase>,
    seeds: Vec<u64>,
}

impl CasePool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fixed: Vec::new(),
            operator: Vec::new(),
            seeds: Vec::new(),
        }
    }

    /// Creates a pool seeded with the built-in worked examples.
    #[must_use]
    pub fn with_known_cases() -> Self {
        Self {
            fixed: known_cases(),
            operator: Vec::new(),
            seeds: Vec::new(),
        }
    }

    /// Appends a fixed case.
    pub fn push_fixed(&mut self, case: TestCase) {
        self.fixed.push(case);
    }

    /// Appends an operator-entered case.
    pub fn push_operator(&mut self, case: TestCase) {
        self.operator.push(case);
    }

    /// Replaces the seed list with `count` consecutive seeds from `start`.
    ///
    /// Seeds are evaluated in ascending order so failure reports stay
    /// reproducible across runs.
    pub fn set_seed_range(&mut self, start: u64, count: u64) {
        self.seeds = (0..count).map(|offset| start.wrapping_add(offset)).collect();
    }

    /// Returns the fixed cases.
    #[must_use]
    pub fn fixed(&self) -> &[TestCase] {
        &self.fixed
    }

    /// Returns the operator-entered cases.
    #[must_use]
    pub fn operator(&self) -> &[TestCase] {
        &self.operator
    }

    /// Returns the seeds for generated cases.
    #[must_use]
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }
}

/// Which pool entry produced a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOrigin {
    /// A fixed case, by zero-based pool index.
    Fixed {
        /// Position within the fixed case list.
        index: usize,
    },
    /// An operator-entered case, by zero-based pool index.
    Operator {
        /// Position within the operator case list.
        index: usize,
    },
    /// A generated case, by seed.
    Seeded {
        /// The seed handed to the generator.
        seed: u64,
    },
}

impl fmt::Display for CaseOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { index } => write!(f, "fixed case {}", index + 1),
            Self::Operator { index } => write!(f, "operator case {}", index + 1),
            Self::Seeded { seed } => write!(f, "seed {seed}"),
        }
    }
}

/// One reference-versus-candidate comparison, retained for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOutcome {
    origin: CaseOrigin,
    case: TestCase,
    reference: error::Result<u64>,
    candidate: error::Result<u64>,
}

impl ComparisonOutcome {
    /// Returns where the case came from.
    #[must_use]
    pub const fn origin(&self) -> CaseOrigin {
        self.origin
    }

    /// Returns the literal inputs the solvers consumed.
    #[must_use]
    pub const fn case(&self) -> &TestCase {
        &self.case
    }

    /// Returns the reference solver's output.
    #[must_use]
    pub const fn reference(&self) -> &error::Result<u64> {
        &self.reference
    }

    /// Returns the candidate solver's output.
    #[must_use]
    pub const fn candidate(&self) -> &error::Result<u64> {
        &self.candidate
    }

    /// Returns `true` when both solvers produced the same output, errors
    /// included.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.reference == self.candidate
    }
}

/// Everything one harness run observed, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessReport {
    outcomes: Vec<ComparisonOutcome>,
}

impl HarnessReport {
    /// Returns every comparison in evaluation order.
    #[must_use]
    pub fn outcomes(&self) -> &[ComparisonOutcome] {
        &self.outcomes
    }

    /// Returns the number of cases evaluated.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns the number of cases where the solvers agreed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Returns the mismatching comparisons in evaluation order.
    pub fn failures(&self) -> impl Iterator<Item = &ComparisonOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// Returns `true` when every comparison passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ComparisonOutcome::passed)
    }
}

/// Differential harness binding a reference solver, a candidate solver, and
/// a case generator.
///
/// # Examples
/// ```
/// use hackerland_core::{
///     BfsSolver, CaseGenerator, CasePool, GeneratorBounds, Harness, UnionFindSolver,
/// };
///
/// let harness = Harness::new(
///     BfsSolver,
///     UnionFindSolver,
///     CaseGenerator::new(GeneratorBounds::default()),
/// );
/// let mut pool = CasePool::with_known_cases();
/// pool.set_seed_range(1, 10);
/// let report = harness.run(&pool).expect("generation must succeed");
/// assert!(report.all_passed());
/// assert_eq!(report.total(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct Harness<R, C> {
    reference: R,
    candidate: C,
    generator: CaseGenerator,
}

impl<R: Solver, C: Solver> Harness<R, C> {
    /// Binds the solvers and generator for a run.
    #[must_use]
    pub const fn new(reference: R, candidate: C, generator: CaseGenerator) -> Self {
        Self {
            reference,
            candidate,
            generator,
        }
    }

    /// Evaluates the whole pool: fixed cases first, then operator cases,
    /// then seeded cases in list order.
    ///
    /// Every case runs to completion; mismatches are collected in the
    /// report and logged, never raised.
    ///
    /// # Errors
    /// Returns [`GenerateError`] only when a seeded case cannot be
    /// generated, which with in-contract bounds indicates a generator bug.
    #[instrument(
        name = "harness.run",
        err,
        skip(self, pool),
        fields(
            reference = self.reference.name(),
            candidate = self.candidate.name(),
            fixed = pool.fixed().len(),
            operator = pool.operator().len(),
            seeds = pool.seeds().len(),
        ),
    )]
    pub fn run(&self, pool: &CasePool) -> Result<HarnessReport, GenerateError> {
        let mut outcomes = Vec::with_capacity(
            pool.fixed().len() + pool.operator().len() + pool.seeds().len(),
        );

        for (index, case) in pool.fixed().iter().enumerate() {
            outcomes.push(self.compare(CaseOrigin::Fixed { index }, case.clone()));
        }
        for (index, case) in pool.operator().iter().enumerate() {
            outcomes.push(self.compare(CaseOrigin::Operator { index }, case.clone()));
        }
        for &seed in pool.seeds() {
            let case = self.generator.generate(seed)?;
            outcomes.push(self.compare(CaseOrigin::Seeded { seed }, case));
        }

        Ok(HarnessReport { outcomes })
    }

    fn compare(&self, origin: CaseOrigin, case: TestCase) -> ComparisonOutcome {
        let reference = self.reference.solve(&case);
        let candidate = self.candidate.solve(&case);
        if reference != candidate {
            warn!(
                origin = %origin,
                reference = ?reference,
                candidate = ?candidate,
                cities = case.cities(),
                library_cost = case.library_cost(),
                road_cost = case.road_cost(),
                roads = case.roads().len(),
                "candidate output diverged from reference"
            );
        }
        ComparisonOutcome {
            origin,
            case,
            reference,
            candidate,
        }
    }
}
