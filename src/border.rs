use crate::math::{LineSegment2d, Point2d};
use crate::GuideError;
use serde::{Deserialize, Serialize};

/// A side of a directed border line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    /// Classifies a [LineSegment2d::signed_area] value.
    /// Returns `None` for a point exactly on the line.
    pub fn of(signed_area: f64) -> Option<Self> {
        if signed_area < 0.0 {
            Some(Side::Left)
        } else if signed_area > 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// A safety border the robot must stay on one side of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Borderline {
    /// The border, directed from its bottom to its top.
    segment: LineSegment2d,
    /// The length of the border in m.
    length: f64,
    /// The side of the border which is safe.
    good_side: Side,
}

impl Borderline {
    /// Creates a new border line.
    ///
    /// Fails if either end point is not finite or the border has no length,
    /// since such a border has no sides.
    pub fn new(bottom: Point2d, top: Point2d, good_side: Side) -> Result<Self, GuideError> {
        let finite = [bottom.x, bottom.y, top.x, top.y]
            .iter()
            .all(|c| c.is_finite());
        let segment = LineSegment2d::from_ends(bottom, top);
        let length = segment.length();
        if !finite || length <= 0.0 {
            return Err(GuideError::DegenerateBorder { bottom, top });
        }
        Ok(Self {
            segment,
            length,
            good_side,
        })
    }

    /// The start point of the border.
    pub fn bottom(&self) -> Point2d {
        self.segment.start
    }

    /// The end point of the border.
    pub fn top(&self) -> Point2d {
        self.segment.end
    }

    /// The border as a line segment.
    pub fn segment(&self) -> &LineSegment2d {
        &self.segment
    }

    /// The length of the border in m.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The side of the border which is safe.
    pub fn good_side(&self) -> Side {
        self.good_side
    }

    /// Gets the side of the (infinitely extended) border that a point is on.
    pub fn side_of(&self, point: Point2d) -> Option<Side> {
        Side::of(self.segment.signed_area(point))
    }

    /// Whether the point is strictly on the safe side of the border.
    pub fn is_safe(&self, point: Point2d) -> bool {
        self.side_of(point) == Some(self.good_side)
    }
}

/// The ordered set of borders of a guidance session.
#[derive(Clone, Debug, Default)]
pub struct BorderSet {
    borders: Vec<Borderline>,
}

impl BorderSet {
    /// Creates an empty border set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates an empty border set with room for `capacity` borders.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            borders: Vec::with_capacity(capacity),
        }
    }

    /// Appends a border. Existing borders keep their order.
    pub fn push(&mut self, border: Borderline) {
        self.borders.push(border);
    }

    /// Creates and appends a border from its end points.
    pub fn add(&mut self, bottom: Point2d, top: Point2d, good_side: Side) -> Result<(), GuideError> {
        self.push(Borderline::new(bottom, top, good_side)?);
        Ok(())
    }

    /// The number of borders.
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    /// Gets the border at the given insertion index.
    pub fn get(&self, idx: usize) -> Option<&Borderline> {
        self.borders.get(idx)
    }

    /// Whether the robot at `point` faces border `idx` square on, with no
    /// other border between them.
    ///
    /// The point must project strictly inside the border, so that its side
    /// is judged against the border itself and not against the border's
    /// line extended past an end.
    pub fn in_view(&self, idx: usize, point: Point2d) -> bool {
        let border = match self.get(idx) {
            Some(border) => border,
            None => return false,
        };
        let (nearest, t) = border.segment().project_point(point);
        if t <= 0.0 || t >= 1.0 {
            return false;
        }
        let sight = LineSegment2d::from_ends(point, nearest);
        self.iter()
            .enumerate()
            .all(|(i, other)| i == idx || !sight.intersects(other.segment()))
    }

    /// Returns an iterator over the borders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Borderline> {
        self.borders.iter()
    }
}

impl<'a> IntoIterator for &'a BorderSet {
    type Item = &'a Borderline;
    type IntoIter = std::slice::Iter<'a, Borderline>;

    fn into_iter(self) -> Self::IntoIter {
        self.borders.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn border_length_and_sides() {
        let border =
            Borderline::new(Point2d::new(-1.5, -9.0), Point2d::new(-1.5, 9.0), Side::Right).unwrap();
        assert_approx_eq!(border.length(), 18.0);
        assert!(border.is_safe(Point2d::new(0.0, 0.0)));
        assert!(!border.is_safe(Point2d::new(-2.0, 0.0)));
        assert_eq!(border.side_of(Point2d::new(-2.0, 0.0)), Some(Side::Left));
        // A point on the line is not safe.
        assert!(!border.is_safe(Point2d::new(-1.5, 3.0)));
    }

    #[test]
    fn left_good_side() {
        let border =
            Borderline::new(Point2d::new(0.0, 0.0), Point2d::new(4.0, 0.0), Side::Left).unwrap();
        assert!(border.is_safe(Point2d::new(2.0, 1.0)));
        assert!(!border.is_safe(Point2d::new(2.0, -1.0)));
    }

    #[test]
    fn rejects_degenerate_border() {
        let p = Point2d::new(1.0, 2.0);
        assert!(matches!(
            Borderline::new(p, p, Side::Right),
            Err(GuideError::DegenerateBorder { .. })
        ));
        assert!(Borderline::new(p, Point2d::new(f64::INFINITY, 2.0), Side::Right).is_err());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut set = BorderSet::with_capacity(1);
        for i in 0..10 {
            let x = i as f64;
            set.add(Point2d::new(x, 0.0), Point2d::new(x, 1.0), Side::Right)
                .unwrap();
        }
        assert_eq!(set.len(), 10);
        for (i, border) in set.iter().enumerate() {
            assert_eq!(border.bottom().x, i as f64);
        }
        assert!(set.get(10).is_none());
    }

    #[test]
    fn border_in_view() {
        let mut set = BorderSet::new();
        set.add(Point2d::new(-1.5, -9.0), Point2d::new(-1.5, 9.0), Side::Right)
            .unwrap();
        set.add(Point2d::new(-3.0, -1.0), Point2d::new(-3.0, 1.0), Side::Left)
            .unwrap();

        assert!(set.in_view(0, Point2d::new(0.0, 0.0)));
        assert!(set.in_view(0, Point2d::new(-2.0, 0.0)));
        // Hidden behind the short border.
        assert!(!set.in_view(0, Point2d::new(-4.0, 0.0)));
        // Beyond the end of the short border.
        assert!(!set.in_view(1, Point2d::new(-2.0, 3.0)));
        assert!(set.in_view(1, Point2d::new(-2.0, 0.5)));
        assert!(!set.in_view(2, Point2d::new(0.0, 0.0)));
    }
}
