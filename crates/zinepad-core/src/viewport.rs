//! Viewport pan/zoom transform.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom level.
pub const MIN_SCALE: f64 = 0.1;
/// Maximum allowed zoom level.
pub const MAX_SCALE: f64 = 5.0;
/// Multiplier applied per wheel step.
pub const SCALE_FACTOR: f64 = 1.05;

/// Maps page (world) coordinates to screen coordinates:
/// `screen = world * scale + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Horizontal translation in screen pixels.
    pub x: f64,
    /// Vertical translation in screen pixels.
    pub y: f64,
    /// Zoom level, always within [`MIN_SCALE`, `MAX_SCALE`].
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x,
            y,
            scale: clamp_scale(scale),
        }
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// World-to-screen transform for rendering.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }

    /// Screen-to-world transform for input handling.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset())
    }

    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Translate by a delta in screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Set a new scale (clamped), keeping `center` (screen space) fixed if given.
    /// Returns `false` if the clamped scale equals the current one.
    pub fn zoom_to(&mut self, scale: f64, center: Option<Point>) -> bool {
        let new_scale = clamp_scale(scale);
        if new_scale == self.scale {
            return false;
        }
        if let Some(c) = center {
            let ratio = new_scale / self.scale;
            self.x = c.x - (c.x - self.x) * ratio;
            self.y = c.y - (c.y - self.y) * ratio;
        }
        self.scale = new_scale;
        true
    }

    /// One wheel step: zoom out for a positive delta, in otherwise.
    pub fn zoom_step(&mut self, delta: f64, center: Option<Point>) -> bool {
        let factor = if delta > 0.0 {
            1.0 / SCALE_FACTOR
        } else {
            SCALE_FACTOR
        };
        self.zoom_to(self.scale * factor, center)
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
