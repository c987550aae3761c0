use crate::border::{BorderSet, Borderline, Side};
use crate::math::Point2d;
use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Mass of the robot in kg.
const MASS: f64 = 30.0;

/// Radius around the robot's centre that must stay clear of borders, in m.
const ROBOT_RADIUS: f64 = 0.3;

/// Radius around each obstacle's centre, in m.
const OBSTACLE_RADIUS: f64 = 0.5;

/// Time-to-impact in s at or below which resistance is full.
const STOP_TIME: f64 = 0.2;

/// Time-to-impact in s at or above which there is no resistance.
const RESISTANCE_TIME: f64 = 5.5;

/// How a normalised time-to-impact is shaped into a resistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistanceCurve {
    /// Rises linearly from 0 at `resistance_time` to 1 at `stop_time`.
    #[default]
    Linear,
    /// The linear curve with its lower half cut off and the upper half
    /// stretched over `[0, 1]`, for robots that already have a noticeable
    /// static resistance of their own.
    StaticOffset,
}

/// The frame in which the push force is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceFrame {
    /// Relative to the robot; rotated into the world frame by `heading - π/2`.
    #[default]
    Robot,
    /// Already in the world frame.
    World,
}

/// A table of border lines as flat `(bottom_x, bottom_y, top_x, top_y)` quadruples.
///
/// Borders are safe to their right unless `good_sides` is given, in which
/// case it holds one side per border.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BorderTable {
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub good_sides: Vec<Side>,
}

impl BorderTable {
    /// Creates a table of borders that are all safe to their right.
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self {
            coordinates,
            good_sides: vec![],
        }
    }

    /// Two parallel lines 3 m apart, running along the y axis.
    pub fn corridor() -> Self {
        #[rustfmt::skip]
        let coordinates = vec![
            -1.5, -9.0, -1.5, 9.0,
            1.5, 9.0, 1.5, -9.0,
        ];
        Self::new(coordinates)
    }

    /// An 8 m by 12 m arena with an island, forming a winding path.
    pub fn windy_path() -> Self {
        #[rustfmt::skip]
        let coordinates = vec![
            // Outer walls
            -4.0, -6.0, -4.0, 6.0,
            -4.0, 6.0, 4.0, 6.0,
            4.0, 6.0, 4.0, -6.0,
            4.0, -6.0, -4.0, -6.0,
            // Island
            1.0, -3.0, -1.0, -2.0,
            -1.0, -2.0, 0.0, 4.0,
            0.0, 4.0, -3.0, 4.0,
            -3.0, 4.0, -2.0, -4.0,
            -2.0, -4.0, 1.0, -3.0,
            // Inner wall
            3.0, 6.0, 2.0, 0.0,
            2.0, 0.0, 3.5, 0.0,
            3.5, 0.0, 3.5, -5.0,
            3.5, -5.0, -3.0, -5.0,
            -3.0, -5.0, -4.0, -6.0,
        ];
        Self::new(coordinates)
    }

    /// An 8 m by 12 m arena split into a zigzag path.
    pub fn zigzag_path() -> Self {
        #[rustfmt::skip]
        let coordinates = vec![
            // Outer walls
            -4.0, -6.0, -4.0, 6.0,
            -4.0, 6.0, 4.0, 6.0,
            4.0, 6.0, 4.0, -6.0,
            4.0, -6.0, -4.0, -6.0,
            // Left zigzag
            0.0, -6.0, -2.5, -3.0,
            -2.5, -3.0, -1.0, 0.0,
            -1.0, 0.0, -3.0, 3.0,
            -3.0, 2.0, -1.0, 6.0,
            // Right zigzag
            2.0, 6.0, -0.5, 3.0,
            -0.5, 3.0, 2.0, 0.0,
            2.0, 0.0, 0.0, -3.0,
            0.0, -3.0, 3.0, -6.0,
        ];
        Self::new(coordinates)
    }

    /// The number of complete quadruples in the table.
    pub fn len(&self) -> usize {
        self.coordinates.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.len() < 4
    }

    /// Builds the borders described by the table.
    pub fn build(&self) -> Result<BorderSet, ConfigError> {
        if self.coordinates.len() % 4 != 0 {
            return Err(ConfigError::UnmatchedQuadruple(self.coordinates.len()));
        }
        if !self.good_sides.is_empty() && self.good_sides.len() != self.len() {
            return Err(ConfigError::SideCountMismatch {
                sides: self.good_sides.len(),
                borders: self.len(),
            });
        }

        let mut borders = BorderSet::with_capacity(self.len());
        for (index, quad) in self.coordinates.chunks_exact(4).enumerate() {
            let good_side = self.good_sides.get(index).copied().unwrap_or_default();
            let bottom = Point2d::new(quad[0], quad[1]);
            let top = Point2d::new(quad[2], quad[3]);
            let border = Borderline::new(bottom, top, good_side)
                .map_err(|_| ConfigError::DegenerateBorder { index })?;
            borders.push(border);
        }
        Ok(borders)
    }
}

/// The calibration of a guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Mass of the robot in kg.
    pub mass: f64,
    /// Radius around the robot's centre that must stay clear, in m.
    pub robot_radius: f64,
    /// Radius around each obstacle's centre, in m.
    pub obstacle_radius: f64,
    /// Time-to-impact in s at or below which resistance is full.
    pub stop_time: f64,
    /// Time-to-impact in s at or above which there is no resistance.
    pub resistance_time: f64,
    /// Shape of the resistance between the two times.
    pub curve: ResistanceCurve,
    /// Frame of the push force.
    pub force_frame: ForceFrame,
    /// The borders built by [crate::Guide::initialize_borders].
    pub borders: BorderTable,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            mass: MASS,
            robot_radius: ROBOT_RADIUS,
            obstacle_radius: OBSTACLE_RADIUS,
            stop_time: STOP_TIME,
            resistance_time: RESISTANCE_TIME,
            curve: ResistanceCurve::default(),
            force_frame: ForceFrame::default(),
            borders: BorderTable::windy_path(),
        }
    }
}

impl GuideConfig {
    /// Parses and validates a JSON configuration.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the calibration values are in range and the border table
    /// is well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        for (name, value) in [
            ("robot_radius", self.robot_radius),
            ("obstacle_radius", self.obstacle_radius),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidRadius { name, value });
            }
        }
        let window_ok = self.stop_time >= 0.0
            && self.resistance_time.is_finite()
            && self.resistance_time > self.stop_time;
        if !window_ok {
            return Err(ConfigError::InvalidTimeWindow {
                stop_time: self.stop_time,
                resistance_time: self.resistance_time,
            });
        }
        self.borders.build().map(|_| ())
    }
}
