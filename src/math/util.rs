use super::Vector2d;
use cgmath::prelude::*;
use cgmath::{Basis2, Rad};

/// Calculates the dot product of two vectors.
///
/// The vectors need not be normalised; for two unit vectors this is the
/// cosine of the angle between them.
#[inline(always)]
pub fn dot(a: Vector2d, b: Vector2d) -> f64 {
    a.dot(b)
}

/// Rotates a vector counter-clockwise by `angle` radians.
pub fn rotate(vec: Vector2d, angle: f64) -> Vector2d {
    let rot: Basis2<f64> = Rotation2::from_angle(Rad(angle));
    rot.rotate_vector(vec)
}
