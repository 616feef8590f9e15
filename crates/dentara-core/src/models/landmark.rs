use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A 2D landmark in image-pixel space.
///
/// Coordinates carry no inherent unit. Angles derived from landmarks are
/// unit-free; distances are in pixels unless the caller pre-scales the
/// coordinates to millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
