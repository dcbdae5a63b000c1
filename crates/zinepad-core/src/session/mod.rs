//! Transient per-run editing state.

mod store;

pub use store::SessionStore;

use crate::config::EditorConfig;
use crate::selection::{Selection, SelectionBox};
use crate::shapes::{Rectangle, Rgba, Shape, ShapeId};
use crate::snap::GRID_SIZE;
use crate::tools::ToolKind;
use crate::viewport::Viewport;
use kurbo::Point;
use std::collections::HashMap;

/// Uncommitted visuals drawn on top of the document.
///
/// During a select drag the document positions are stale; `drag_positions`
/// holds the live origins until the move is committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub drag_positions: HashMap<ShapeId, Point>,
    pub preview: Option<Shape>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.drag_positions.is_empty() && self.preview.is_none()
    }
}

/// Everything about the current editing session that is not saved.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub viewport: Viewport,
    pub selection: Selection,
    pub current_tool: ToolKind,
    pub is_dragging: bool,
    pub is_drawing: bool,
    /// World point where the current gesture began.
    pub drag_start: Option<Point>,
    pub snap_to_grid: bool,
    pub grid_size: f64,
    pub show_grid: bool,
    pub selection_box: Option<SelectionBox>,
    pub default_fill: Rgba,
    pub default_stroke: Rgba,
    pub default_stroke_width: f64,
    pub overlay: Overlay,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            selection: Selection::new(),
            current_tool: ToolKind::default(),
            is_dragging: false,
            is_drawing: false,
            drag_start: None,
            snap_to_grid: true,
            grid_size: GRID_SIZE,
            show_grid: true,
            selection_box: None,
            default_fill: Rectangle::DEFAULT_FILL,
            default_stroke: Rectangle::DEFAULT_STROKE,
            default_stroke_width: Rectangle::DEFAULT_STROKE_WIDTH,
            overlay: Overlay::default(),
        }
    }
}

impl SessionState {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            snap_to_grid: config.snap_to_grid,
            show_grid: config.show_grid,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SessionState::default();
        assert_eq!(state.viewport, Viewport::default());
        assert!(state.selection.is_empty());
        assert_eq!(state.current_tool, ToolKind::Select);
        assert!(state.snap_to_grid);
        assert!(state.show_grid);
        assert!((state.grid_size - 10.0).abs() < f64::EPSILON);
        assert_eq!(state.default_fill.to_hex(), "#4a90d9");
        assert_eq!(state.default_stroke.to_hex(), "#2c5282");
        assert!((state.default_stroke_width - 2.0).abs() < f64::EPSILON);
        assert!(state.overlay.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = EditorConfig {
            grid_size: 25.0,
            snap_to_grid: false,
            ..EditorConfig::default()
        };
        let state = SessionState::from_config(&config);
        assert!((state.grid_size - 25.0).abs() < f64::EPSILON);
        assert!(!state.snap_to_grid);
        assert!(state.show_grid);
    }
}
