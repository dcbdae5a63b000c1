//! Rectangle shape.

use super::Rgba;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with optional rounded corners.
/// The shape origin is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f64,
    /// Corner radius (0 = sharp corners).
    #[serde(default)]
    pub corner_radius: f64,
}

impl Rectangle {
    pub const DEFAULT_FILL: Rgba = Rgba::hex(0x4a90d9);
    pub const DEFAULT_STROKE: Rgba = Rgba::hex(0x2c5282);
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Create a new rectangle with the default style.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: Self::DEFAULT_FILL,
            stroke: Self::DEFAULT_STROKE,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            corner_radius: 0.0,
        }
    }

    pub(crate) fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}
