//! Property tests for the solver algebra.

use hackerland_core::{
    BfsSolver, CaseGenerator, ComponentPartition, GeneratorBounds, Road, Solver, TestCase,
    UnionFindSolver, component_cost,
};
use proptest::prelude::*;

const MAX_CITIES: u32 = 40;
const MAX_COST: u64 = 1_000_000;

prop_compose! {
    fn arb_case()(cities in 1..=MAX_CITIES)(
        cities in Just(cities),
        library_cost in 0..=MAX_COST,
        road_cost in 0..=MAX_COST,
        pairs in prop::collection::vec((1..=cities, 1..=cities), 0..120),
    ) -> TestCase {
        TestCase::new(
            cities,
            library_cost,
            road_cost,
            pairs.into_iter().map(Road::from).collect(),
        )
    }
}

proptest! {
    #[test]
    fn cost_formula_holds(size in 1u64..10_000, c_lib in 0..=MAX_COST, c_road in 0..=MAX_COST) {
        let expected = (size * c_lib).min(c_lib + (size - 1) * c_road);
        prop_assert_eq!(component_cost(size, c_lib, c_road), Ok(expected));
    }

    #[test]
    fn singleton_components_cost_exactly_one_library(c_lib in 0..=MAX_COST, c_road in 0..=MAX_COST) {
        prop_assert_eq!(component_cost(1, c_lib, c_road), Ok(c_lib));
    }

    #[test]
    fn candidate_agrees_with_reference(case in arb_case()) {
        prop_assert_eq!(BfsSolver.solve(&case), UnionFindSolver.solve(&case));
    }

    #[test]
    fn total_is_the_sum_of_component_costs(case in arb_case()) {
        let partition = ComponentPartition::analyse(case.cities(), case.roads())
            .expect("generated cases are valid");
        let mut sum = 0u64;
        for &size in partition.sizes() {
            sum += component_cost(size, case.library_cost(), case.road_cost())
                .expect("bounded costs cannot overflow");
        }
        prop_assert_eq!(BfsSolver.solve(&case), Ok(sum));
    }

    #[test]
    fn duplicates_and_self_loops_are_idempotent(case in arb_case()) {
        let mut noisy_roads = case.roads().to_vec();
        noisy_roads.extend(case.roads().iter().map(|road| Road::new(road.right(), road.left())));
        noisy_roads.push(Road::new(1, 1));
        let noisy = TestCase::new(
            case.cities(),
            case.library_cost(),
            case.road_cost(),
            noisy_roads,
        );
        prop_assert_eq!(BfsSolver.solve(&case), BfsSolver.solve(&noisy));
    }

    #[test]
    fn adding_a_road_never_raises_the_total(
        case in arb_case(),
        left in 1..=MAX_CITIES,
        right in 1..=MAX_CITIES,
    ) {
        let left = left.min(case.cities());
        let right = right.min(case.cities());
        let mut extended_roads = case.roads().to_vec();
        extended_roads.push(Road::new(left, right));
        let extended = TestCase::new(
            case.cities(),
            case.library_cost(),
            case.road_cost(),
            extended_roads,
        );
        let before = BfsSolver.solve(&case).expect("generated cases are valid");
        let after = BfsSolver.solve(&extended).expect("generated cases are valid");
        prop_assert!(after <= before);
    }

    #[test]
    fn generator_output_is_deterministic_per_seed(seed in any::<u64>()) {
        let bounds = GeneratorBounds::new(1..=30, 0..=MAX_COST, 0..=MAX_COST)
            .expect("bounds are non-empty");
        let generator = CaseGenerator::new(bounds);
        let first = generator.generate(seed).expect("generation must succeed");
        let second = generator.generate(seed).expect("generation must succeed");
        prop_assert_eq!(first, second);
    }
}
