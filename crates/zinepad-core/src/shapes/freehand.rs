//! Freehand drawing shape.

use super::{Rgba, flat_points, flat_points_bounds};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A captured pointer path, smoothed by the renderer with `tension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freehand {
    /// Flat `[x0, y0, x1, y1, ...]` list in shape-local space.
    pub points: Vec<f64>,
    pub stroke: Rgba,
    pub stroke_width: f64,
    #[serde(default)]
    pub tension: f64,
}

impl Freehand {
    pub const DEFAULT_STROKE: Rgba = Rgba::hex(0xe53e3e);
    pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;
    pub const DEFAULT_TENSION: f64 = 0.5;

    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            stroke: Self::DEFAULT_STROKE,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            tension: Self::DEFAULT_TENSION,
        }
    }

    /// Build from page-space points, re-expressed relative to their top-left.
    ///
    /// Returns the top-left corner (the shape origin) together with the shape.
    /// `None` if there are no points.
    pub fn from_world_points(points: &[Point]) -> Option<(Point, Self)> {
        let first = points.first()?;
        let (min_x, min_y) = points
            .iter()
            .fold((first.x, first.y), |(mx, my), p| (mx.min(p.x), my.min(p.y)));
        let local = points
            .iter()
            .flat_map(|p| [p.x - min_x, p.y - min_y])
            .collect();
        Some((Point::new(min_x, min_y), Self::new(local)))
    }

    /// Number of captured points.
    pub fn len(&self) -> usize {
        self.points.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the points in shape-local space.
    pub fn iter_points(&self) -> impl Iterator<Item = Point> + '_ {
        flat_points(&self.points)
    }

    pub(crate) fn local_bounds(&self) -> Rect {
        flat_points_bounds(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_points_normalizes() {
        let pts = [
            Point::new(50.0, 80.0),
            Point::new(40.0, 90.0),
            Point::new(60.0, 70.0),
        ];
        let (origin, freehand) = Freehand::from_world_points(&pts).unwrap();
        assert_eq!(origin, Point::new(40.0, 70.0));
        assert_eq!(freehand.points, vec![10.0, 10.0, 0.0, 20.0, 20.0, 0.0]);
        assert_eq!(freehand.len(), 3);
        let bounds = freehand.local_bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_world_points_empty() {
        assert!(Freehand::from_world_points(&[]).is_none());
    }
}
