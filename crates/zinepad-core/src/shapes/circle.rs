//! Circle shape.

use super::Rgba;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// A circle. The shape origin is the centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub radius: f64,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

impl Circle {
    pub const DEFAULT_FILL: Rgba = Rgba::hex(0x48bb78);
    pub const DEFAULT_STROKE: Rgba = Rgba::hex(0x276749);
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Create a new circle with the default style.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            fill: Self::DEFAULT_FILL,
            stroke: Self::DEFAULT_STROKE,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }

    pub(crate) fn local_bounds(&self) -> Rect {
        Rect::new(-self.radius, -self.radius, self.radius, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_centered() {
        let bounds = Circle::new(10.0).local_bounds();
        assert!((bounds.x0 + 10.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 20.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 20.0).abs() < f64::EPSILON);
    }
}
