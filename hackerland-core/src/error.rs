//! Error types for the Hackerland core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::case::Road;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating or solving a test case.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolveError {
    /// The case declared fewer than one city.
    #[error("city count must be at least 1 (got {got})")]
    InvalidCityCount {
        /// The invalid city count supplied by the caller.
        got: u32,
    },
    /// A road referenced a city identifier outside `[1, cities]`.
    #[error("road ({road}) references a city outside [1, {cities}]")]
    RoadOutOfRange {
        /// The offending road.
        road: Road,
        /// Number of cities declared by the case.
        cities: u32,
    },
    /// The total cost exceeded the representable range.
    #[error("cost for a component of {component_size} cities overflows u64")]
    CostOverflow {
        /// Size of the component whose cost could not be represented.
        component_size: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolveError`] variants.
    enum SolveErrorCode for SolveError {
        /// The case declared fewer than one city.
        InvalidCityCount => InvalidCityCount { .. } => "SOLVE_INVALID_CITY_COUNT",
        /// A road referenced a city identifier outside the declared range.
        RoadOutOfRange => RoadOutOfRange { .. } => "SOLVE_ROAD_OUT_OF_RANGE",
        /// The total cost exceeded the representable range.
        CostOverflow => CostOverflow { .. } => "SOLVE_COST_OVERFLOW",
    }
}

/// An error produced while configuring or running the case generator.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerateError {
    /// A bound range was empty or the city lower bound was below 1.
    #[error("generator bound `{bound}` is invalid: {lower}..={upper}")]
    InvalidBounds {
        /// Name of the offending bound.
        bound: &'static str,
        /// Lower end of the range as supplied.
        lower: u64,
        /// Upper end of the range as supplied.
        upper: u64,
    },
    /// The complete-graph edge count did not fit the host index width.
    ///
    /// This indicates a generator contract violation rather than bad input:
    /// sampled city counts must keep the edge enumeration addressable.
    #[error("edge enumeration of {edge_count} entries exceeds the host index width")]
    EdgeIndexOverflow {
        /// Number of entries in the complete-graph edge enumeration.
        edge_count: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// A bound range was empty or the city lower bound was below 1.
        InvalidBounds => InvalidBounds { .. } => "GENERATE_INVALID_BOUNDS",
        /// The complete-graph edge count did not fit the host index width.
        EdgeIndexOverflow => EdgeIndexOverflow { .. } => "GENERATE_EDGE_INDEX_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SolveError>;
