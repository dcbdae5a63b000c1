//! Line shape.

use super::{Rgba, flat_points_bounds};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Stroke end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Stroke corner join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// A polyline through `points`, relative to the shape origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Flat `[x0, y0, x1, y1, ...]` list in shape-local space.
    pub points: Vec<f64>,
    pub stroke: Rgba,
    pub stroke_width: f64,
    #[serde(default)]
    pub line_cap: LineCap,
    #[serde(default)]
    pub line_join: LineJoin,
}

impl Line {
    pub const DEFAULT_STROKE: Rgba = Rgba::hex(0x1a202c);
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            stroke: Self::DEFAULT_STROKE,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }

    /// Straight segment from the origin to `(dx, dy)`.
    pub fn segment(dx: f64, dy: f64) -> Self {
        Self::new(vec![0.0, 0.0, dx, dy])
    }

    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    pub(crate) fn local_bounds(&self) -> Rect {
        flat_points_bounds(&self.points)
    }
}

pub(crate) fn polyline_length(points: &[f64]) -> f64 {
    let pts: Vec<_> = super::flat_points(points).collect();
    pts.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_length() {
        let line = Line::segment(3.0, 4.0);
        assert!((line.length() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_caps_default_round() {
        let line = Line::segment(1.0, 1.0);
        assert_eq!(line.line_cap, LineCap::Round);
        assert_eq!(line.line_join, LineJoin::Round);
    }
}
