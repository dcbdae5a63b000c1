//! Text shape.

use super::Rgba;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Horizontal alignment inside the text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A text box. The shape origin is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill: Rgba,
    /// Wrapping width. Zero means "unset".
    pub width: f64,
    #[serde(default)]
    pub align: TextAlign,
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    pub const DEFAULT_FONT_FAMILY: &'static str = "Arial, sans-serif";
    pub const DEFAULT_FILL: Rgba = Rgba::hex(0x1a202c);
    pub const DEFAULT_WIDTH: f64 = 200.0;

    /// Width assumed for bounds when `width` is unset.
    const FALLBACK_WIDTH: f64 = 100.0;
    /// Line height as a multiple of the font size.
    const LINE_HEIGHT: f64 = 1.2;

    /// Create a text box with the default font and width.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            fill: Self::DEFAULT_FILL,
            width: Self::DEFAULT_WIDTH,
            align: TextAlign::default(),
        }
    }

    /// Single-line bounds; wrapping is resolved by the renderer.
    pub(crate) fn local_bounds(&self) -> Rect {
        let width = if self.width > 0.0 {
            self.width
        } else {
            Self::FALLBACK_WIDTH
        };
        Rect::new(0.0, 0.0, width, self.font_size * Self::LINE_HEIGHT)
    }
}
