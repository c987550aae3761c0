//! Computes how strongly a guidance controller should resist a push on a
//! mobile robot, so that it stays within its borders and clear of obstacles.

pub use border::{BorderSet, Borderline, Side};
pub use cgmath;
pub use config::{BorderTable, ForceFrame, GuideConfig, ResistanceCurve};
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{ConfigError, GuideError};
pub use guide::{Boundary, Evaluation, Governing, Guide, Pose};
pub use obstacle::Obstacle;
pub use proximity::{approach_border, approach_obstacle, Action, Proximity};
pub use resistance::ResistanceModel;
pub use util::Interval;

mod border;
mod config;
mod debug;
mod error;
mod guide;
pub mod math;
mod obstacle;
mod proximity;
mod resistance;
mod util;
