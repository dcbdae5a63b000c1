//! Grid snapping.

use kurbo::Point;

/// Default grid spacing in page units.
pub const GRID_SIZE: f64 = 10.0;

/// Round `value` to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid size disables snapping.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return value;
    }
    let snapped = (value / grid_size).round() * grid_size;
    // Normalise -0.0 so persisted deltas print as 0.
    if snapped == 0.0 { 0.0 } else { snapped }
}

/// Snap both coordinates of a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(snap_value(point.x, grid_size), snap_value(point.y, grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        let snapped = snap_to_grid(Point::new(14.0, 26.0), 10.0);
        assert!((snapped.x - 10.0).abs() < f64::EPSILON);
        assert!((snapped.y - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_negative() {
        assert!((snap_value(-14.0, 10.0) + 10.0).abs() < f64::EPSILON);
        assert!((snap_value(-16.0, 10.0) + 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_small_values_snap_to_zero() {
        assert_eq!(snap_value(2.0, 10.0), 0.0);
        assert!(snap_value(-2.0, 10.0).is_sign_positive());
    }

    #[test]
    fn test_snap_is_idempotent() {
        for i in -500..500 {
            let v = i as f64 * 0.37 + 0.013;
            for grid in [1.0, 7.5, 10.0, 20.0] {
                let once = snap_value(v, grid);
                assert_eq!(snap_value(once, grid), once, "v={v} grid={grid}");
            }
        }
    }

    #[test]
    fn test_invalid_grid_is_identity() {
        assert_eq!(snap_value(13.3, 0.0), 13.3);
        assert_eq!(snap_value(13.3, -5.0), 13.3);
        assert_eq!(snap_value(13.3, f64::NAN), 13.3);
    }
}
