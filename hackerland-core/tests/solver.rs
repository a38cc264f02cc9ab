//! Behavioural tests for the reference and candidate solvers.

use hackerland_core::{BfsSolver, Road, SolveError, Solver, TestCase, UnionFindSolver};
use rstest::rstest;

fn build_case(cities: u32, library_cost: u64, road_cost: u64, roads: &[(u32, u32)]) -> TestCase {
    TestCase::new(
        cities,
        library_cost,
        road_cost,
        roads.iter().copied().map(Road::from).collect(),
    )
}

fn solvers() -> Vec<Box<dyn Solver>> {
    vec![Box::new(BfsSolver), Box::new(UnionFindSolver)]
}

#[rstest]
#[case::worked_example_one(
    build_case(7, 3, 2, &[(1, 2), (2, 3), (3, 1), (4, 1), (5, 6), (6, 7)]),
    16,
)]
#[case::worked_example_two(
    build_case(6, 2, 5, &[(1, 3), (3, 4), (2, 4), (1, 2), (2, 3), (5, 6)]),
    12,
)]
#[case::no_roads_means_one_library_each(build_case(5, 6, 1, &[]), 30)]
#[case::free_roads_collapse_to_one_library(build_case(5, 6, 0, &[(1, 2), (2, 3), (3, 4), (4, 5)]), 6)]
#[case::single_city(build_case(1, 9, 2, &[]), 9)]
#[case::zero_library_cost(build_case(4, 0, 7, &[]), 0)]
#[case::fully_connected(build_case(4, 10, 1, &[(1, 2), (2, 3), (3, 4)]), 13)]
fn both_solvers_answer_known_cases(#[case] input: TestCase, #[case] expected: u64) {
    for solver in solvers() {
        assert_eq!(
            solver.solve(&input),
            Ok(expected),
            "solver `{}` disagreed",
            solver.name()
        );
    }
}

#[rstest]
fn duplicate_roads_and_self_loops_change_nothing() {
    let plain = build_case(6, 2, 5, &[(1, 3), (3, 4), (2, 4), (1, 2), (2, 3), (5, 6)]);
    let noisy = build_case(
        6,
        2,
        5,
        &[
            (1, 3),
            (3, 1),
            (3, 4),
            (2, 4),
            (1, 2),
            (2, 3),
            (5, 6),
            (5, 6),
            (6, 6),
        ],
    );
    for solver in solvers() {
        assert_eq!(solver.solve(&plain), solver.solve(&noisy));
        assert_eq!(solver.solve(&noisy), Ok(12));
    }
}

#[rstest]
#[case::zero_cities(build_case(0, 1, 1, &[]))]
#[case::endpoint_above_range(build_case(3, 1, 1, &[(1, 4)]))]
#[case::endpoint_below_range(build_case(3, 1, 1, &[(0, 2)]))]
fn both_solvers_reject_invalid_input_identically(#[case] input: TestCase) {
    let reference = BfsSolver.solve(&input);
    let candidate = UnionFindSolver.solve(&input);
    assert!(reference.is_err());
    assert_eq!(reference, candidate);
}

#[rstest]
fn both_solvers_surface_cost_overflow() {
    let input = build_case(3, u64::MAX, u64::MAX, &[]);
    for solver in solvers() {
        assert!(matches!(
            solver.solve(&input),
            Err(SolveError::CostOverflow { .. })
        ));
    }
}

#[rstest]
fn merging_components_never_raises_the_cost() {
    let disconnected = build_case(6, 4, 3, &[(1, 2), (4, 5)]);
    let merged = build_case(6, 4, 3, &[(1, 2), (4, 5), (2, 4)]);
    for solver in solvers() {
        let before = solver.solve(&disconnected).expect("valid case must solve");
        let after = solver.solve(&merged).expect("valid case must solve");
        assert!(after <= before);
    }
}
