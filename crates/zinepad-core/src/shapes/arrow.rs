//! Arrow shape.

use super::line::{LineCap, LineJoin, polyline_length};
use super::{Rgba, flat_points_bounds};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// A line with an arrowhead at its last point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    /// Flat `[x0, y0, x1, y1, ...]` list in shape-local space.
    pub points: Vec<f64>,
    pub stroke: Rgba,
    pub stroke_width: f64,
    #[serde(default)]
    pub line_cap: LineCap,
    #[serde(default)]
    pub line_join: LineJoin,
    /// Arrowhead length along the last segment.
    pub pointer_length: f64,
    /// Arrowhead width across the last segment.
    pub pointer_width: f64,
}

impl Arrow {
    pub const DEFAULT_STROKE: Rgba = Rgba::hex(0x1a202c);
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
    pub const DEFAULT_POINTER_SIZE: f64 = 10.0;

    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            stroke: Self::DEFAULT_STROKE,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            pointer_length: Self::DEFAULT_POINTER_SIZE,
            pointer_width: Self::DEFAULT_POINTER_SIZE,
        }
    }

    /// Straight arrow from the origin to `(dx, dy)`.
    pub fn segment(dx: f64, dy: f64) -> Self {
        Self::new(vec![0.0, 0.0, dx, dy])
    }

    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    pub(crate) fn local_bounds(&self) -> Rect {
        flat_points_bounds(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_defaults() {
        let arrow = Arrow::segment(10.0, 0.0);
        assert!((arrow.pointer_length - 10.0).abs() < f64::EPSILON);
        assert!((arrow.pointer_width - 10.0).abs() < f64::EPSILON);
        assert!((arrow.length() - 10.0).abs() < f64::EPSILON);
    }
}
