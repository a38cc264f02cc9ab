//! Stable error code mapping tests.

use hackerland_core::{GenerateError, GenerateErrorCode, Road, SolveError, SolveErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    SolveError::InvalidCityCount { got: 0 },
    SolveErrorCode::InvalidCityCount,
)]
#[case(
    SolveError::RoadOutOfRange { road: Road::new(1, 9), cities: 4 },
    SolveErrorCode::RoadOutOfRange,
)]
#[case(
    SolveError::CostOverflow { component_size: u64::MAX },
    SolveErrorCode::CostOverflow,
)]
fn returns_expected_solve_code(#[case] error: SolveError, #[case] expected: SolveErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(
    GenerateError::InvalidBounds { bound: "cities", lower: 3, upper: 1 },
    GenerateErrorCode::InvalidBounds,
)]
#[case(
    GenerateError::EdgeIndexOverflow { edge_count: u64::MAX },
    GenerateErrorCode::EdgeIndexOverflow,
)]
fn returns_expected_generate_code(
    #[case] error: GenerateError,
    #[case] expected: GenerateErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
fn solve_codes_are_distinct_and_stable() {
    assert_eq!(
        SolveErrorCode::InvalidCityCount.as_str(),
        "SOLVE_INVALID_CITY_COUNT"
    );
    assert_eq!(
        SolveErrorCode::RoadOutOfRange.as_str(),
        "SOLVE_ROAD_OUT_OF_RANGE"
    );
    assert_eq!(SolveErrorCode::CostOverflow.as_str(), "SOLVE_COST_OVERFLOW");
    assert_eq!(
        GenerateErrorCode::InvalidBounds.as_str(),
        "GENERATE_INVALID_BOUNDS"
    );
    assert_eq!(
        GenerateErrorCode::EdgeIndexOverflow.as_str(),
        "GENERATE_EDGE_INDEX_OVERFLOW"
    );
}
