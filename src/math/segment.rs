use super::{Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

/// A directed straight line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment2d {
    /// The start of the segment.
    pub start: Point2d,
    /// The end of the segment.
    pub end: Point2d,
}

impl LineSegment2d {
    /// Creates a line segment from its two end points.
    pub const fn from_ends(start: Point2d, end: Point2d) -> Self {
        Self { start, end }
    }

    /// The vector from `start` to `end`.
    pub fn delta(&self) -> Vector2d {
        self.end - self.start
    }

    /// The length of the segment in m.
    pub fn length(&self) -> f64 {
        self.delta().magnitude()
    }

    /// Samples the point a fraction `t` of the way along the segment.
    pub fn sample(&self, t: f64) -> Point2d {
        self.start + t * self.delta()
    }

    /// Projects a point onto the segment.
    ///
    /// # Returns
    /// The closest point on the segment, and the fraction `t` in `[0, 1]`
    /// along the segment at which it lies. A zero-length segment projects
    /// every point onto `start`.
    pub fn project_point(&self, point: Point2d) -> (Point2d, f64) {
        let delta = self.delta();
        let len2 = delta.magnitude2();
        if len2 <= 0.0 {
            return (self.start, 0.0);
        }
        let t = Interval::unit().clamp((point - self.start).dot(delta) / len2);
        (self.sample(t), t)
    }

    /// Twice the signed area of the triangle `(start, end, point)`,
    /// oriented so that the result is negative when `point` lies to the left
    /// of the directed segment and positive when it lies to the right.
    pub fn signed_area(&self, point: Point2d) -> f64 {
        (point - self.start).perp_dot(self.delta())
    }

    /// Whether the two segments have any point in common, including where
    /// one only touches the other.
    pub fn intersects(&self, other: &LineSegment2d) -> bool {
        let d1 = self.signed_area(other.start);
        let d2 = self.signed_area(other.end);
        let d3 = other.signed_area(self.start);
        let d4 = other.signed_area(self.end);
        if opposite(d1, d2) && opposite(d3, d4) {
            return true;
        }
        (d1 == 0.0 && self.spans(other.start))
            || (d2 == 0.0 && self.spans(other.end))
            || (d3 == 0.0 && other.spans(self.start))
            || (d4 == 0.0 && other.spans(self.end))
    }

    /// Whether a point on the segment's line lies within the segment.
    fn spans(&self, point: Point2d) -> bool {
        let (start, end) = (self.start, self.end);
        point.x >= start.x.min(end.x)
            && point.x <= start.x.max(end.x)
            && point.y >= start.y.min(end.y)
            && point.y <= start.y.max(end.y)
    }
}

fn opposite(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}
