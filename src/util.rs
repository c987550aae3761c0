//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;

/// An interval on the real number line.
///
/// `min` is not required to be less than `max`; a reversed interval is used
/// to map a decreasing quantity onto an increasing one with [Interval::inv_lerp].
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Float> Interval<T> {
    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Clamps a value into the interval. NaN is clamped to the lower bound.
    pub fn clamp(&self, value: T) -> T {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        if value.is_nan() {
            lo
        } else {
            value.max(lo).min(hi)
        }
    }

    /// Maps a value linearly so that `min` maps to `0` and `max` to `1`.
    pub fn inv_lerp(&self, value: T) -> T {
        (value - self.min) / (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}
