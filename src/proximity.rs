//! Classifies how a push force relates to a single border or obstacle.

use crate::border::Borderline;
use crate::debug::{debug_circle, debug_line};
use crate::math::{dot, Direction, Point2d};
use crate::obstacle::Obstacle;

/// What the robot should do about one border or obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// The boundary does not constrain the push.
    Nothing,
    /// The robot is being pushed towards the boundary from its safe side.
    Resist {
        /// How far the robot travels along the force direction before its
        /// clearance is used up, in m. Zero or negative when the robot is
        /// already within its clearance.
        distance: f64,
    },
    /// The robot has crossed a border and is being pushed further past it.
    Stop,
}

/// The result of classifying a single border or obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proximity {
    pub action: Action,
    /// Distance between the robot's edge and the boundary in m.
    /// Negative when they overlap.
    pub clearance: f64,
}

impl Proximity {
    /// Whether the boundary constrains the push at all.
    pub fn is_relevant(&self) -> bool {
        self.action != Action::Nothing
    }
}

/// Determines whether the robot at `point` is being pushed towards `border`.
///
/// # Parameters
/// * `point` - The position of the robot's centre.
/// * `border` - The border line.
/// * `force` - The direction of the push force in world space.
/// * `robot_radius` - The clearance kept around the robot's centre.
///
/// # Returns
/// [Action::Resist] if the robot is on the safe side and pushed towards the
/// border, [Action::Stop] if it is on the unsafe side and not pushed back
/// towards it, and [Action::Nothing] otherwise.
pub fn approach_border(
    point: Point2d,
    border: &Borderline,
    force: &Direction,
    robot_radius: f64,
) -> Proximity {
    let (nearest, _) = border.segment().project_point(point);
    debug_line("border", point, nearest);

    let to_border = Direction::from_vector(nearest - point);
    let clearance = to_border.magnitude - robot_radius;
    let angle = dot(force.unit, to_border.unit);
    let approaching = angle > 0.0;

    let action = match (border.is_safe(point), approaching) {
        (true, true) => Action::Resist {
            distance: clearance / angle,
        },
        (false, false) => Action::Stop,
        _ => Action::Nothing,
    };

    log::debug!(
        "border {:?} -> {:?}: clearance {:.3}, angle {:.3}, {:?}",
        border.bottom(),
        border.top(),
        clearance,
        angle,
        action
    );
    Proximity { action, clearance }
}

/// Determines whether the robot at `point` is being pushed towards `obstacle`.
///
/// Obstacles have no sides, so this never returns [Action::Stop].
pub fn approach_obstacle(
    point: Point2d,
    obstacle: &Obstacle,
    force: &Direction,
    robot_radius: f64,
    obstacle_radius: f64,
) -> Proximity {
    debug_circle("obstacle", obstacle.centre, obstacle_radius + robot_radius);

    let to_obstacle = Direction::from_vector(obstacle.centre - point);
    let clearance = to_obstacle.magnitude - robot_radius - obstacle_radius;
    let angle = dot(force.unit, to_obstacle.unit);

    let action = if angle > 0.0 {
        Action::Resist {
            distance: clearance / angle,
        }
    } else {
        Action::Nothing
    };

    log::debug!(
        "obstacle at {:?}: clearance {:.3}, angle {:.3}, {:?}",
        obstacle.centre,
        clearance,
        angle,
        action
    );
    Proximity { action, clearance }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::border::Side;
    use assert_approx_eq::assert_approx_eq;

    const RADIUS: f64 = 0.3;

    fn left_wall() -> Borderline {
        Borderline::new(Point2d::new(-1.5, -9.0), Point2d::new(-1.5, 9.0), Side::Right).unwrap()
    }

    fn resist_distance(prox: Proximity) -> f64 {
        match prox.action {
            Action::Resist { distance } => distance,
            action => panic!("expected resist, got {:?}", action),
        }
    }

    #[test]
    fn pushed_towards_border() {
        let prox = approach_border(
            Point2d::new(0.0, 0.0),
            &left_wall(),
            &Direction::new(-5.0, 0.0),
            RADIUS,
        );
        assert_approx_eq!(prox.clearance, 1.2);
        assert_approx_eq!(resist_distance(prox), 1.2);
    }

    #[test]
    fn oblique_push_travels_further() {
        // 60 degrees off the border normal, so twice the distance to impact.
        let force = Direction::new(-0.5, 3f64.sqrt() / 2.0);
        let prox = approach_border(Point2d::new(0.0, 0.0), &left_wall(), &force, RADIUS);
        assert_approx_eq!(resist_distance(prox), 2.4);
    }

    #[test]
    fn pushed_away_from_border() {
        let prox = approach_border(
            Point2d::new(0.0, 0.0),
            &left_wall(),
            &Direction::new(5.0, 0.0),
            RADIUS,
        );
        assert_eq!(prox.action, Action::Nothing);
        assert!(!prox.is_relevant());
    }

    #[test]
    fn parallel_push_is_not_approaching() {
        let prox = approach_border(
            Point2d::new(0.0, 0.0),
            &left_wall(),
            &Direction::new(0.0, 5.0),
            RADIUS,
        );
        assert_eq!(prox.action, Action::Nothing);
    }

    #[test]
    fn past_border_and_pushed_further() {
        let prox = approach_border(
            Point2d::new(-2.0, 0.0),
            &left_wall(),
            &Direction::new(-5.0, 0.0),
            RADIUS,
        );
        assert_eq!(prox.action, Action::Stop);
        assert_approx_eq!(prox.clearance, 0.2);
    }

    #[test]
    fn past_border_and_pushed_back() {
        let prox = approach_border(
            Point2d::new(-2.0, 0.0),
            &left_wall(),
            &Direction::new(5.0, 0.0),
            RADIUS,
        );
        assert_eq!(prox.action, Action::Nothing);
    }

    #[test]
    fn within_clearance_of_border() {
        let prox = approach_border(
            Point2d::new(-1.4, 0.0),
            &left_wall(),
            &Direction::new(-1.0, 0.0),
            RADIUS,
        );
        assert_approx_eq!(prox.clearance, -0.2);
        assert!(resist_distance(prox) < 0.0);
    }

    #[test]
    fn beyond_end_of_border() {
        // Nearest point is the top end of the border.
        let prox = approach_border(
            Point2d::new(1.5, 13.0),
            &left_wall(),
            &Direction::new(-3.0, -4.0),
            RADIUS,
        );
        assert_approx_eq!(prox.clearance, 4.7);
        assert_approx_eq!(resist_distance(prox), 4.7);
    }

    #[test]
    fn obstacle_ahead() {
        let prox = approach_obstacle(
            Point2d::new(0.0, 0.0),
            &Obstacle::new(0.0, 3.0),
            &Direction::new(0.0, 10.0),
            RADIUS,
            0.5,
        );
        assert_approx_eq!(prox.clearance, 2.2);
        assert_approx_eq!(resist_distance(prox), 2.2);
    }

    #[test]
    fn obstacle_behind_never_stops() {
        let prox = approach_obstacle(
            Point2d::new(0.0, 0.0),
            &Obstacle::new(0.0, 0.5),
            &Direction::new(0.0, -10.0),
            RADIUS,
            0.5,
        );
        assert_eq!(prox.action, Action::Nothing);
        assert_approx_eq!(prox.clearance, -0.3);
    }

    #[test]
    fn no_push() {
        let prox = approach_obstacle(
            Point2d::new(0.0, 0.0),
            &Obstacle::new(0.0, 3.0),
            &Direction::ZERO,
            RADIUS,
            0.5,
        );
        assert_eq!(prox.action, Action::Nothing);
    }
}
