use crate::border::{BorderSet, Side};
use crate::config::{ForceFrame, GuideConfig};
use crate::debug::debug_governing;
use crate::math::{rotate, Direction, Point2d, Vector2d};
use crate::obstacle::Obstacle;
use crate::proximity::{approach_border, approach_obstacle, Action, Proximity};
use crate::resistance::ResistanceModel;
use crate::GuideError;
use cgmath::InnerSpace;
use std::f64::consts::FRAC_PI_2;

/// The position and heading of the robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// The world space coordinates of the robot's centre, in m.
    pub position: Point2d,
    /// The heading in radians; 0 means facing along the positive y axis.
    pub heading: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Point2d { x, y },
            heading,
        }
    }
}

/// A border or obstacle, by its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Index into the guide's [BorderSet].
    Border(usize),
    /// Index into the obstacles passed to the query.
    Obstacle(usize),
}

/// The boundary that determined the resistance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Governing {
    pub boundary: Boundary,
    pub proximity: Proximity,
}

/// The outcome of a resistance query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// The resistance in `[0, 1]`.
    pub resistance: f64,
    /// The governing boundary, if any boundary constrains the push.
    pub governing: Option<Governing>,
}

/// A guidance session: the calibration and borders that resistance queries
/// are evaluated against.
///
/// Queries take `&self` and border edits take `&mut self`, so borders can
/// never change while a query is running.
#[derive(Clone, Debug)]
pub struct Guide {
    config: GuideConfig,
    model: ResistanceModel,
    /// `None` before [Guide::initialize_borders] and after [Guide::cleanup].
    borders: Option<BorderSet>,
}

impl Guide {
    /// Creates a new guide with the given calibration. The borders must be
    /// initialised before the first query.
    pub fn new(config: GuideConfig) -> Result<Self, GuideError> {
        config.validate()?;
        Ok(Self {
            model: ResistanceModel::new(&config),
            config,
            borders: None,
        })
    }

    /// Gets the guide's calibration.
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Whether the borders are initialised.
    pub fn is_initialized(&self) -> bool {
        self.borders.is_some()
    }

    /// Builds the borders from the configured border table, replacing any
    /// existing borders.
    pub fn initialize_borders(&mut self) -> Result<(), GuideError> {
        let borders = self.config.borders.build()?;
        log::info!("initialised {} borders", borders.len());
        self.borders = Some(borders);
        Ok(())
    }

    /// Adds a border running from `bottom` to `top`, which the robot must
    /// stay on the `good_side` of.
    pub fn add_border(
        &mut self,
        bottom: Point2d,
        top: Point2d,
        good_side: Side,
    ) -> Result<(), GuideError> {
        let borders = self.borders.as_mut().ok_or(GuideError::Uninitialized)?;
        borders.add(bottom, top, good_side)
    }

    /// Gets the borders.
    pub fn borders(&self) -> Result<&BorderSet, GuideError> {
        self.borders.as_ref().ok_or(GuideError::Uninitialized)
    }

    /// Releases the borders. Queries fail until the borders are initialised again.
    pub fn cleanup(&mut self) {
        if let Some(borders) = self.borders.take() {
            log::info!("released {} borders", borders.len());
        }
    }

    /// Computes the resistance needed when the robot at `pose` is pushed with `force`.
    ///
    /// # Parameters
    /// * `pose` - The robot's position in m and heading in radians.
    /// * `force` - The push force in N, in the configured [ForceFrame].
    /// * `obstacles` - The obstacles around the robot this cycle.
    pub fn get_resistance(
        &self,
        pose: Pose,
        force: Vector2d,
        obstacles: &[Obstacle],
    ) -> Result<f64, GuideError> {
        self.evaluate(pose, force, obstacles.iter().copied())
            .map(|eval| eval.resistance)
    }

    /// Computes the resistance from plain values, with obstacle `i` centred
    /// on `(obstacles[2 * i], obstacles[2 * i + 1])`.
    pub fn get_resistance_flat(
        &self,
        x: f64,
        y: f64,
        heading: f64,
        force_x: f64,
        force_y: f64,
        obstacles: &[f64],
    ) -> Result<f64, GuideError> {
        let obstacles = Obstacle::from_flat(obstacles)?;
        self.evaluate(
            Pose::new(x, y, heading),
            Vector2d::new(force_x, force_y),
            obstacles,
        )
        .map(|eval| eval.resistance)
    }

    /// Computes the resistance and reports which boundary governs it.
    ///
    /// A crossed border that the robot is pushed further past gives full
    /// resistance. Which side of a border the robot is on is judged against
    /// the border's infinite line, so a border only counts as crossed if it
    /// is the nearest border, or if the robot faces it square on with no
    /// other border in between. Otherwise the resisting border or obstacle
    /// that the push reaches first governs, with borders winning ties; ties
    /// between borders or between obstacles go to the first one given.
    pub fn evaluate(
        &self,
        pose: Pose,
        force: Vector2d,
        obstacles: impl IntoIterator<Item = Obstacle>,
    ) -> Result<Evaluation, GuideError> {
        let borders = self.borders()?;
        if !(pose.position.x.is_finite() && pose.position.y.is_finite() && pose.heading.is_finite())
        {
            return Err(GuideError::NonFiniteInput("pose"));
        }
        if !(force.x.is_finite() && force.y.is_finite()) {
            return Err(GuideError::NonFiniteInput("force"));
        }
        let force = self.world_force(pose.heading, force);
        if !force.magnitude().is_finite() {
            return Err(GuideError::NonFiniteInput("force"));
        }

        let point = pose.position;
        let force = Direction::from_vector(force);
        let robot_radius = self.config.robot_radius;

        let mut nearest_border = None;
        let mut crossed_border = None;
        let mut resisting_border = None;
        for (idx, border) in borders.iter().enumerate() {
            let gov = Governing {
                boundary: Boundary::Border(idx),
                proximity: approach_border(point, border, &force, robot_radius),
            };
            if gov.proximity.action == Action::Stop
                && crossed_border.is_none()
                && borders.in_view(idx, point)
            {
                crossed_border = Some(gov);
            }
            nearest_border = nearest(nearest_border, gov);
            resisting_border = first_reached(resisting_border, gov);
        }

        let crossed = nearest_border
            .filter(|gov| gov.proximity.action == Action::Stop)
            .or(crossed_border);
        if let Some(gov) = crossed {
            if force.is_zero() {
                log::warn!("robot at {:?} is past a border with no push applied", point);
            }
            log::debug!("stop: {:?}", gov.boundary);
            debug_governing(Some(&gov), 1.0);
            return Ok(Evaluation {
                resistance: 1.0,
                governing: Some(gov),
            });
        }

        let mut obstacle = None;
        for (idx, obs) in obstacles.into_iter().enumerate() {
            if !(obs.centre.x.is_finite() && obs.centre.y.is_finite()) {
                return Err(GuideError::NonFiniteInput("obstacle"));
            }
            let gov = Governing {
                boundary: Boundary::Obstacle(idx),
                proximity: approach_obstacle(
                    point,
                    &obs,
                    &force,
                    robot_radius,
                    self.config.obstacle_radius,
                ),
            };
            obstacle = first_reached(obstacle, gov);
        }

        let governing = match (resisting_border, obstacle) {
            (Some(b), Some(o)) if reach(&o) < reach(&b) => Some(o),
            (b, o) => b.or(o),
        };
        let resistance = match governing.map(|gov| gov.proximity.action) {
            Some(Action::Resist { distance }) => self.model.resistance(force.magnitude, distance),
            Some(Action::Stop) => 1.0,
            Some(Action::Nothing) | None => 0.0,
        };

        log::debug!("resistance {:.3} from {:?}", resistance, governing);
        debug_governing(governing.as_ref(), resistance);
        Ok(Evaluation {
            resistance,
            governing,
        })
    }

    /// Rotates the push force into the world frame.
    fn world_force(&self, heading: f64, force: Vector2d) -> Vector2d {
        match self.config.force_frame {
            ForceFrame::Robot => rotate(force, heading - FRAC_PI_2),
            ForceFrame::World => force,
        }
    }
}

/// Keeps the nearer of two boundaries, or the first if they are equally near.
fn nearest(best: Option<Governing>, candidate: Governing) -> Option<Governing> {
    match best {
        Some(best) if best.proximity.clearance <= candidate.proximity.clearance => Some(best),
        _ => Some(candidate),
    }
}

/// How far the robot can be pushed before it reaches the boundary.
/// Infinite for boundaries that do not resist the push.
fn reach(gov: &Governing) -> f64 {
    match gov.proximity.action {
        Action::Resist { distance } => distance,
        _ => f64::INFINITY,
    }
}

/// Keeps whichever resisting boundary the push reaches first, or the first
/// if both are reached together. Boundaries that do not resist are skipped.
fn first_reached(best: Option<Governing>, candidate: Governing) -> Option<Governing> {
    if !matches!(candidate.proximity.action, Action::Resist { .. }) {
        return best;
    }
    match best {
        Some(best) if reach(&best) <= reach(&candidate) => Some(best),
        _ => Some(candidate),
    }
}
