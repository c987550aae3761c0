#[cfg(feature = "debug")]
use crate::guide::Boundary;
use crate::guide::Governing;
use crate::math::Point2d;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records a line, such as from the robot to the nearest point on a border.
#[allow(unused)]
pub fn debug_line(name: &str, p1: Point2d, p2: Point2d) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "line",
            "name": name,
            "p1": [p1.x, p1.y],
            "p2": [p2.x, p2.y],
        }))
    })
}

/// Records a circle, such as the zone an obstacle keeps the robot's centre out of.
#[allow(unused)]
pub fn debug_circle(name: &str, centre: Point2d, radius: f64) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "circle",
            "name": name,
            "centre": [centre.x, centre.y],
            "radius": radius
        }))
    })
}

/// Records the boundary that determined the resistance of a query, if any.
#[allow(unused)]
pub fn debug_governing(governing: Option<&Governing>, resistance: f64) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        let boundary = governing.map(|gov| match gov.boundary {
            Boundary::Border(idx) => json!({ "border": idx }),
            Boundary::Obstacle(idx) => json!({ "obstacle": idx }),
        });
        frame.borrow_mut().push(json!({
            "type": "governing",
            "boundary": boundary,
            "clearance": governing.map(|gov| gov.proximity.clearance),
            "resistance": resistance,
        }))
    })
}

/// Takes the shapes recorded on this thread since the last call, as a JSON array.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
