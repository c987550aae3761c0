use crate::config::{GuideConfig, ResistanceCurve};
use crate::util::Interval;

/// Maps a distance-to-impact under a push force onto a resistance in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct ResistanceModel {
    /// Mass of the robot in kg.
    mass: f64,
    /// Time-to-impact at which resistance starts (min) and becomes full (max), in s.
    window: Interval<f64>,
    curve: ResistanceCurve,
}

impl ResistanceModel {
    /// Creates a resistance model from a validated configuration.
    pub fn new(config: &GuideConfig) -> Self {
        ResistanceModel {
            mass: config.mass,
            window: Interval::new(config.resistance_time, config.stop_time),
            curve: config.curve,
        }
    }

    /// The acceleration of the robot under a push of `force` N, in m/s<sup>2</sup>.
    pub fn acceleration(&self, force: f64) -> f64 {
        force / self.mass
    }

    /// Calculates the time it takes the robot, starting at rest, to travel
    /// `dist` m when pushed with a constant `force` N.
    ///
    /// Infinite when there is no push.
    pub fn time_to_impact(&self, force: f64, dist: f64) -> f64 {
        let acc = self.acceleration(force);
        if acc <= 0.0 {
            return f64::INFINITY;
        }
        (2.0 * dist.max(0.0) / acc).sqrt()
    }

    /// Calculates the resistance needed when the robot is pushed with `force` N
    /// and will reach a boundary after travelling `dist` m.
    ///
    /// # Parameters
    /// * `force` - The magnitude of the push force in N.
    /// * `dist` - The distance to impact along the force direction in m.
    ///   Zero or negative means the robot is already within its clearance.
    pub fn resistance(&self, force: f64, dist: f64) -> f64 {
        if dist <= 0.0 {
            return 1.0;
        }
        let time = self.time_to_impact(force, dist);
        if time.is_infinite() {
            return 0.0;
        }
        let linear = self.window.inv_lerp(time);
        let shaped = match self.curve {
            ResistanceCurve::Linear => linear,
            ResistanceCurve::StaticOffset => (linear - 0.5) * 2.0,
        };
        Interval::unit().clamp(shaped)
    }
}
