//! Solver contract and the two bundled implementations.
//!
//! [`BfsSolver`] is the trusted reference: it composes the connectivity
//! analyser with the per-component cost optimiser. [`UnionFindSolver`] is
//! the candidate under validation: an independently written solver over
//! disjoint sets whose output must agree with the reference for every
//! valid input, including the error it rejects invalid input with.

use tracing::instrument;

use crate::{
    case::TestCase,
    cost::component_cost,
    error::{Result, SolveError},
    graph::ComponentPartition,
};

/// A complete roads-and-libraries solver.
///
/// Implementations must be deterministic and structurally interchangeable:
/// same signature, same accepted inputs, same outputs. Internal algorithms
/// may differ.
pub trait Solver {
    /// Human-readable name used in harness reports and diagnostics.
    fn name(&self) -> &str;

    /// Computes the minimum total cost for `case`.
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidCityCount`] or
    /// [`SolveError::RoadOutOfRange`] for invalid input, and
    /// [`SolveError::CostOverflow`] when the total is unrepresentable.
    fn solve(&self, case: &TestCase) -> Result<u64>;
}

/// Reference solver: breadth-first component discovery plus the cost
/// optimiser, summed over components.
///
/// # Examples
/// ```
/// use hackerland_core::{BfsSolver, Road, Solver, TestCase};
///
/// let case = TestCase::new(
///     7,
///     3,
///     2,
///     [(1, 2), (2, 3), (3, 1), (4, 1), (5, 6), (6, 7)]
///         .map(Road::from)
///         .to_vec(),
/// );
/// assert_eq!(BfsSolver.solve(&case), Ok(16));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl Solver for BfsSolver {
    fn name(&self) -> &str {
        "bfs-reference"
    }

    #[instrument(
        name = "solver.bfs",
        err,
        skip(self, case),
        fields(cities = case.cities(), roads = case.roads().len()),
    )]
    fn solve(&self, case: &TestCase) -> Result<u64> {
        let partition = ComponentPartition::analyse(case.cities(), case.roads())?;
        let mut total = 0u64;
        for &size in partition.sizes() {
            let cost = component_cost(size, case.library_cost(), case.road_cost())?;
            total = total
                .checked_add(cost)
                .ok_or(SolveError::CostOverflow {
                    component_size: size,
                })?;
        }
        Ok(total)
    }
}

/// Candidate solver: disjoint-set connectivity with its own cost
/// arithmetic.
///
/// Deliberately shares no traversal or costing code with [`BfsSolver`] so
/// the differential harness compares genuinely independent computations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionFindSolver;

impl Solver for UnionFindSolver {
    fn name(&self) -> &str {
        "union-find-candidate"
    }

    #[instrument(
        name = "solver.union_find",
        err,
        skip(self, case),
        fields(cities = case.cities(), roads = case.roads().len()),
    )]
    fn solve(&self, case: &TestCase) -> Result<u64> {
        case.validate()?;

        let count = case.cities() as usize;
        let mut sets = DisjointSets::new(count + 1);
        for road in case.roads() {
            sets.union(road.left() as usize, road.right() as usize);
        }

        let mut sizes = vec![0u64; count + 1];
        for city in 1..=count {
            let root = sets.find(city);
            sizes[root] += 1;
        }

        let mut total = 0u64;
        for &size in sizes.iter().filter(|&&size| size > 0) {
            let overflow = || SolveError::CostOverflow {
                component_size: size,
            };
            let libraries = size.checked_mul(case.library_cost()).ok_or_else(overflow)?;
            let roads = (size - 1)
                .checked_mul(case.road_cost())
                .and_then(|spend| case.library_cost().checked_add(spend))
                .ok_or_else(overflow)?;
            total = total
                .checked_add(libraries.min(roads))
                .ok_or_else(overflow)?;
        }
        Ok(total)
    }
}

/// Sequential union-find with path halving and union by rank.
struct DisjointSets {
    parents: Vec<usize>,
    ranks: Vec<u32>,
}

impl DisjointSets {
    fn new(count: usize) -> Self {
        Self {
            parents: (0..count).collect(),
            ranks: vec![0; count],
        }
    }

    fn find(&mut self, node: usize) -> usize {
        let mut current = node;
        while self.parents[current] != current {
            let grandparent = self.parents[self.parents[current]];
            self.parents[current] = grandparent;
            current = grandparent;
        }
        current
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = if self.ranks[left_root] >= self.ranks[right_root] {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parents[child] = parent;
        if self.ranks[left_root] == self.ranks[right_root] {
            self.ranks[parent] += 1;
        }
        true
    }
}
