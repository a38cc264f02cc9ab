//! Test case model for the roads-and-libraries problem.
//!
//! Provides the [`Road`] pair type and the immutable [`TestCase`] four-tuple
//! consumed by solvers, the generator, and the differential harness.

use std::fmt;

use crate::error::SolveError;

/// A candidate bidirectional road between two cities.
///
/// Roads are unordered: `Road::new(2, 5)` and `Road::new(5, 2)` describe the
/// same connection. Duplicate roads and self-loops are accepted as input and
/// contribute nothing further to connectivity.
///
/// # Examples
/// ```
/// use hackerland_core::Road;
///
/// let road = Road::new(5, 2);
/// assert_eq!(road.normalised(), Road::new(2, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Road {
    left: u32,
    right: u32,
}

impl Road {
    /// Creates a road between two city identifiers.
    #[must_use]
    pub const fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// Returns the first endpoint as written.
    #[must_use]
    pub const fn left(self) -> u32 {
        self.left
    }

    /// Returns the second endpoint as written.
    #[must_use]
    pub const fn right(self) -> u32 {
        self.right
    }

    /// Returns the road with endpoints ordered `(min, max)`.
    ///
    /// Normalisation makes duplicate detection independent of the direction
    /// in which a road was entered.
    #[must_use]
    pub const fn normalised(self) -> Self {
        if self.left <= self.right {
            self
        } else {
            Self {
                left: self.right,
                right: self.left,
            }
        }
    }

    /// Returns `true` when both endpoints name the same city.
    #[must_use]
    pub const fn is_self_loop(self) -> bool {
        self.left == self.right
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

impl From<(u32, u32)> for Road {
    fn from((left, right): (u32, u32)) -> Self {
        Self::new(left, right)
    }
}

/// One input to the roads-and-libraries problem.
///
/// Cities are identified by integers in `[1, cities]`. A case is immutable
/// once built; both solvers consume it by reference during a comparison.
///
/// # Examples
/// ```
/// use hackerland_core::{Road, TestCase};
///
/// let case = TestCase::new(3, 2, 1, vec![Road::new(1, 2)]);
/// assert!(case.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    cities: u32,
    library_cost: u64,
    road_cost: u64,
    roads: Vec<Road>,
}

impl TestCase {
    /// Builds a case from its four components.
    ///
    /// Construction does not validate; solvers call [`Self::validate`]
    /// before traversal so operator-entered nonsense surfaces as a typed
    /// error rather than a panic.
    #[must_use]
    pub const fn new(cities: u32, library_cost: u64, road_cost: u64, roads: Vec<Road>) -> Self {
        Self {
            cities,
            library_cost,
            road_cost,
            roads,
        }
    }

    /// Returns the number of cities `n`.
    #[must_use]
    pub const fn cities(&self) -> u32 {
        self.cities
    }

    /// Returns the cost of building one library.
    #[must_use]
    pub const fn library_cost(&self) -> u64 {
        self.library_cost
    }

    /// Returns the cost of building one road.
    #[must_use]
    pub const fn road_cost(&self) -> u64 {
        self.road_cost
    }

    /// Returns the candidate roads in entry order.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Checks the case against the solver contract.
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidCityCount`] when `cities < 1` and
    /// [`SolveError::RoadOutOfRange`] when any endpoint falls outside
    /// `[1, cities]`.
    ///
    /// # Examples
    /// ```
    /// use hackerland_core::{Road, SolveError, TestCase};
    ///
    /// let case = TestCase::new(2, 1, 1, vec![Road::new(1, 3)]);
    /// assert!(matches!(
    ///     case.validate(),
    ///     Err(SolveError::RoadOutOfRange { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.cities < 1 {
            return Err(SolveError::InvalidCityCount { got: self.cities });
        }
        ensure_roads_in_range(self.cities, &self.roads)
    }
}

/// Checks every road endpoint against `[1, cities]`.
pub(crate) fn ensure_roads_in_range(cities: u32, roads: &[Road]) -> Result<(), SolveError> {
    let in_range = |city: u32| city >= 1 && city <= cities;
    for road in roads {
        if !in_range(road.left()) || !in_range(road.right()) {
            return Err(SolveError::RoadOutOfRange {
                road: *road,
                cities,
            });
        }
    }
    Ok(())
}
