//! Cost optimisation for a single connected component.
//!
//! Exactly two strategies exist for a component that is already known to be
//! connected: a library in every city, or one library plus a spanning set of
//! roads. The cheaper wins.

use crate::error::{Result, SolveError};

/// Returns the minimal cost to give every city in a component of `size`
/// cities library access.
///
/// The candidate strategies are `size * library_cost` (a library
/// everywhere) and `library_cost + (size - 1) * road_cost` (one library,
/// spanning roads). A component of one city therefore costs exactly
/// `library_cost`.
///
/// # Errors
/// Returns [`SolveError::CostOverflow`] when either strategy exceeds the
/// representable range.
///
/// # Examples
/// ```
/// use hackerland_core::component_cost;
///
/// assert_eq!(component_cost(4, 3, 2), Ok(9));
/// assert_eq!(component_cost(1, 7, 100), Ok(7));
/// ```
pub fn component_cost(size: u64, library_cost: u64, road_cost: u64) -> Result<u64> {
    let overflow = || SolveError::CostOverflow {
        component_size: size,
    };
    let libraries_everywhere = size.checked_mul(library_cost).ok_or_else(overflow)?;
    let spanning_roads = size
        .saturating_sub(1)
        .checked_mul(road_cost)
        .and_then(|roads| library_cost.checked_add(roads))
        .ok_or_else(overflow)?;
    Ok(libraries_everywhere.min(spanning_roads))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::roads_cheaper(4, 3, 2, 9)]
    #[case::libraries_cheaper(4, 2, 5, 8)]
    #[case::singleton(1, 3, 2, 3)]
    #[case::free_roads(6, 4, 0, 4)]
    #[case::free_libraries(6, 0, 4, 0)]
    #[case::tie(2, 2, 2, 4)]
    fn picks_cheaper_strategy(
        #[case] size: u64,
        #[case] library_cost: u64,
        #[case] road_cost: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(component_cost(size, library_cost, road_cost), Ok(expected));
    }

    #[rstest]
    fn surfaces_overflow() {
        let result = component_cost(u64::MAX, u64::MAX, 1);
        assert!(matches!(
            result,
            Err(SolveError::CostOverflow {
                component_size: u64::MAX
            })
        ));
    }
}
