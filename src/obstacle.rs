use crate::math::Point2d;
use crate::GuideError;
use itertools::Itertools;

/// A circular obstacle the robot must not be pushed into.
///
/// All obstacles share the radius set in [crate::GuideConfig::obstacle_radius].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// The world space coordinates of the obstacle's centre.
    pub centre: Point2d,
}

impl Obstacle {
    /// Creates an obstacle centred on `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            centre: Point2d { x, y },
        }
    }

    /// Reads obstacles from a flat list of coordinates, where obstacle `i` is
    /// centred on `(coords[2 * i], coords[2 * i + 1])`.
    ///
    /// Fails if the list has an odd length. Does not allocate.
    pub fn from_flat(coords: &[f64]) -> Result<impl Iterator<Item = Obstacle> + '_, GuideError> {
        if coords.len() % 2 != 0 {
            return Err(GuideError::MalformedObstacles { len: coords.len() });
        }
        Ok(coords
            .iter()
            .copied()
            .tuples::<(f64, f64)>()
            .map(|(x, y)| Obstacle::new(x, y)))
    }
}
