//! Connectivity analysis for the city graph.
//!
//! Partitions cities into connected components with a single breadth-first
//! sweep over an adjacency structure built once from the road list.

use std::collections::VecDeque;

use tracing::instrument;

use crate::{
    case::{Road, ensure_roads_in_range},
    error::{Result, SolveError},
};

/// Identifier assigned to a connected component.
///
/// Components are numbered from zero in the order their lowest city
/// identifier is visited, so numbering is deterministic for a given case.
///
/// # Examples
/// ```
/// use hackerland_core::ComponentId;
///
/// let id = ComponentId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Creates a new component identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u32) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

/// Total, disjoint partition of `{1, …, cities}` into connected components.
///
/// Every city belongs to exactly one component, including isolated cities,
/// which form singleton components.
///
/// # Examples
/// ```
/// use hackerland_core::{ComponentPartition, Road};
///
/// let partition = ComponentPartition::analyse(4, &[Road::new(1, 2)])
///     .expect("roads are in range");
/// assert_eq!(partition.component_count(), 3);
/// assert_eq!(partition.sizes(), &[2, 1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPartition {
    membership: Vec<ComponentId>,
    sizes: Vec<u64>,
}

impl ComponentPartition {
    /// Partitions `{1, …, cities}` under the supplied candidate roads.
    ///
    /// The adjacency structure is built once (two directed entries per
    /// road); each city is visited at most once. Unvisited cities seed new
    /// traversals in increasing identifier order, giving a reproducible
    /// visitation sequence. Self-loops and duplicate roads are harmless
    /// no-ops. Runs in O(cities + roads) time and space.
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidCityCount`] when `cities < 1` and
    /// [`SolveError::RoadOutOfRange`] when a road endpoint falls outside
    /// `[1, cities]`; both are rejected before any traversal.
    #[instrument(name = "graph.analyse", err, skip(roads), fields(roads = roads.len()))]
    pub fn analyse(cities: u32, roads: &[Road]) -> Result<Self> {
        if cities < 1 {
            return Err(SolveError::InvalidCityCount { got: cities });
        }
        ensure_roads_in_range(cities, roads)?;

        let count = cities as usize;
        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); count + 1];
        for road in roads {
            adjacency[road.left() as usize].push(road.right());
            adjacency[road.right() as usize].push(road.left());
        }

        let mut membership = vec![ComponentId::new(0); count];
        let mut visited = vec![false; count + 1];
        let mut sizes = Vec::new();
        let mut queue = VecDeque::new();

        for seed in 1..=cities {
            if visited[seed as usize] {
                continue;
            }
            let component = ComponentId::new(sizes.len() as u32);
            let mut size = 0u64;
            visited[seed as usize] = true;
            queue.push_back(seed);
            while let Some(city) = queue.pop_front() {
                membership[(city - 1) as usize] = component;
                size += 1;
                for &neighbour in &adjacency[city as usize] {
                    if !visited[neighbour as usize] {
                        visited[neighbour as usize] = true;
                        queue.push_back(neighbour);
                    }
                }
            }
            sizes.push(size);
        }

        Ok(Self { membership, sizes })
    }

    /// Returns the number of components discovered.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns per-component city counts, indexed by [`ComponentId`].
    #[must_use]
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns the component containing `city`, or `None` when the
    /// identifier falls outside `[1, cities]`.
    #[must_use]
    pub fn component_of(&self, city: u32) -> Option<ComponentId> {
        if city < 1 {
            return None;
        }
        self.membership.get((city - 1) as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn roads(pairs: &[(u32, u32)]) -> Vec<Road> {
        pairs.iter().copied().map(Road::from).collect()
    }

    #[rstest]
    #[case::worked_example(
        7,
        vec![(1, 2), (2, 3), (3, 1), (4, 1), (5, 6), (6, 7)],
        vec![4, 3],
    )]
    #[case::no_roads(4, vec![], vec![1, 1, 1, 1])]
    #[case::single_city(1, vec![], vec![1])]
    #[case::chain(3, vec![(1, 2), (2, 3)], vec![3])]
    fn partitions_into_expected_sizes(
        #[case] cities: u32,
        #[case] pairs: Vec<(u32, u32)>,
        #[case] expected: Vec<u64>,
    ) {
        let partition =
            ComponentPartition::analyse(cities, &roads(&pairs)).expect("valid case must partition");
        assert_eq!(partition.sizes(), expected.as_slice());
        assert_eq!(partition.component_count(), expected.len());
    }

    #[rstest]
    fn duplicate_roads_and_self_loops_are_no_ops() {
        let plain = ComponentPartition::analyse(3, &roads(&[(1, 2)]));
        let noisy = ComponentPartition::analyse(3, &roads(&[(1, 2), (2, 1), (1, 2), (3, 3)]));
        assert_eq!(plain, noisy);
    }

    #[rstest]
    fn membership_is_total_and_deterministic() {
        let partition = ComponentPartition::analyse(5, &roads(&[(4, 5)]))
            .expect("valid case must partition");
        assert_eq!(partition.component_of(1), Some(ComponentId::new(0)));
        assert_eq!(partition.component_of(2), Some(ComponentId::new(1)));
        assert_eq!(partition.component_of(3), Some(ComponentId::new(2)));
        assert_eq!(partition.component_of(4), Some(ComponentId::new(3)));
        assert_eq!(partition.component_of(5), Some(ComponentId::new(3)));
        assert_eq!(partition.component_of(0), None);
        assert_eq!(partition.component_of(6), None);
    }

    #[rstest]
    fn rejects_out_of_range_roads() {
        let result = ComponentPartition::analyse(2, &roads(&[(1, 3)]));
        assert!(matches!(
            result,
            Err(SolveError::RoadOutOfRange { cities: 2, .. })
        ));
    }

    #[rstest]
    fn rejects_zero_cities() {
        let result = ComponentPartition::analyse(0, &[]);
        assert!(matches!(result, Err(SolveError::InvalidCityCount { got: 0 })));
    }
}
