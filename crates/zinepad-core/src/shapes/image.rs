//! Image shape.
//!
//! Only the reference is stored; decoding is left to the renderer.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Source URL or data URI.
    pub src: String,
    pub width: f64,
    pub height: f64,
}

impl Image {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }

    pub(crate) fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}
