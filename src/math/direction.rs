use super::Vector2d;
use cgmath::prelude::*;

/// A unit direction together with the magnitude of the vector it was made from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    /// The normalised vector, or the zero vector if the input had no length.
    pub unit: Vector2d,
    /// The length of the original vector.
    pub magnitude: f64,
}

impl Direction {
    /// The direction of a zero-length vector.
    pub const ZERO: Self = Self {
        unit: Vector2d { x: 0.0, y: 0.0 },
        magnitude: 0.0,
    };

    /// Creates a direction from the components of a vector.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self::from_vector(Vector2d::new(dx, dy))
    }

    /// Splits a vector into its unit direction and magnitude.
    ///
    /// Zero-length and non-finite vectors give [Direction::ZERO] instead of
    /// dividing by zero.
    pub fn from_vector(vec: Vector2d) -> Self {
        let magnitude = vec.magnitude();
        if magnitude > 0.0 && magnitude.is_finite() {
            Self {
                unit: vec / magnitude,
                magnitude,
            }
        } else {
            Self::ZERO
        }
    }

    /// Whether this direction came from a zero-length vector.
    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    /// Gets the original vector back.
    pub fn to_vector(&self) -> Vector2d {
        self.unit * self.magnitude
    }
}
