//! Error types for configuring and querying a [crate::Guide].

use crate::math::Point2d;
use thiserror::Error;

/// Invalid guide configuration. Detected when the configuration is
/// validated or the borders are initialised, never during a query.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Robot mass must be positive
    #[error("robot mass must be positive and finite, got {0} kg")]
    InvalidMass(f64),

    /// A radius is negative or not finite
    #[error("{name} must be non-negative and finite, got {value} m")]
    InvalidRadius {
        /// Which radius
        name: &'static str,
        /// The configured value
        value: f64,
    },

    /// Stop and resistance times do not form a window
    #[error("invalid time window: need 0 <= stop_time ({stop_time}s) < resistance_time ({resistance_time}s)")]
    InvalidTimeWindow {
        /// Time-to-impact below which resistance is full
        stop_time: f64,
        /// Time-to-impact above which there is no resistance
        resistance_time: f64,
    },

    /// The border table is not made of `(bottomX, bottomY, topX, topY)` quadruples
    #[error("border table has {0} coordinates, which is not a multiple of four")]
    UnmatchedQuadruple(usize),

    /// A border in the table has no length or a non-finite coordinate
    #[error("border {index} in the table is degenerate")]
    DegenerateBorder {
        /// Index of the border in the table
        index: usize,
    },

    /// The good side overrides do not line up with the borders
    #[error("{sides} good sides given for {borders} borders")]
    SideCountMismatch {
        /// Number of good sides
        sides: usize,
        /// Number of borders in the table
        borders: usize,
    },

    /// The configuration could not be parsed
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors returned by a [crate::Guide].
#[derive(Error, Debug)]
pub enum GuideError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The borders have not been initialised, or have been cleaned up
    #[error("borders are not initialised")]
    Uninitialized,

    /// A border with no length or a non-finite end point
    #[error("degenerate border from {bottom:?} to {top:?}")]
    DegenerateBorder { bottom: Point2d, top: Point2d },

    /// A flat obstacle list with an unpaired coordinate
    #[error("obstacle list has {len} coordinates, expected (x, y) pairs")]
    MalformedObstacles { len: usize },

    /// A pose, force or obstacle coordinate is NaN or infinite
    #[error("non-finite {0} input")]
    NonFiniteInput(&'static str),
}
