//! Session state container with change notification.

use super::{Overlay, SessionState};
use crate::config::EditorConfig;
use crate::observer::{Observers, Subscription};
use crate::selection::{Selection, SelectionBox};
use crate::shapes::{Rgba, Shape, ShapeId};
use crate::snap;
use crate::tools::ToolKind;
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};

/// Owns the [`SessionState`]. Every mutator notifies listeners synchronously;
/// nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
    observers: Observers<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            state: SessionState::from_config(config),
            observers: Observers::new(),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) -> Subscription {
        self.observers.subscribe(listener)
    }

    fn notify(&self) {
        self.observers.notify(&self.state);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // --- viewport ---

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    /// Replace the viewport. The scale is clamped.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = Viewport::new(viewport.x, viewport.y, viewport.scale);
        self.notify();
    }

    pub fn pan_viewport(&mut self, dx: f64, dy: f64) {
        self.state.viewport.pan(Vec2::new(dx, dy));
        self.notify();
    }

    /// One zoom step: out for a positive `delta`, in otherwise. With a
    /// `center` (screen space), the world point under it stays put.
    /// Silent when the scale is already at the limit.
    pub fn zoom_viewport(&mut self, delta: f64, center: Option<Point>) {
        if self.state.viewport.zoom_step(delta, center) {
            self.notify();
        }
    }

    pub fn set_zoom(&mut self, scale: f64) {
        self.state.viewport.zoom_to(scale, None);
        self.notify();
    }

    pub fn reset_viewport(&mut self) {
        self.state.viewport = Viewport::default();
        self.notify();
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.state.viewport.screen_to_world(screen)
    }

    // --- selection ---

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn selected_ids(&self) -> &[ShapeId] {
        self.state.selection.as_slice()
    }

    /// Replace the selection, dropping repeated ids.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.state.selection.set(ids);
        self.notify();
    }

    pub fn add_to_selection(&mut self, id: ShapeId) {
        if self.state.selection.insert(id) {
            self.notify();
        }
    }

    pub fn remove_from_selection(&mut self, id: ShapeId) {
        self.state.selection.remove(id);
        self.notify();
    }

    pub fn toggle_selection(&mut self, id: ShapeId) {
        self.state.selection.toggle(id);
        self.notify();
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
        self.notify();
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.state.selection.contains(id)
    }

    pub fn selection_box(&self) -> Option<SelectionBox> {
        self.state.selection_box
    }

    pub fn set_selection_box(&mut self, selection_box: Option<SelectionBox>) {
        self.state.selection_box = selection_box;
        self.notify();
    }

    // --- tool and gesture flags ---

    pub fn current_tool(&self) -> ToolKind {
        self.state.current_tool
    }

    pub fn set_current_tool(&mut self, tool: ToolKind) {
        self.state.current_tool = tool;
        self.notify();
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.state.is_dragging = dragging;
        self.notify();
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing
    }

    pub fn set_drawing(&mut self, drawing: bool) {
        self.state.is_drawing = drawing;
        self.notify();
    }

    pub fn drag_start(&self) -> Option<Point> {
        self.state.drag_start
    }

    pub fn set_drag_start(&mut self, start: Option<Point>) {
        self.state.drag_start = start;
        self.notify();
    }

    // --- grid ---

    pub fn snap_enabled(&self) -> bool {
        self.state.snap_to_grid
    }

    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.state.snap_to_grid = snap;
        self.notify();
    }

    pub fn grid_size(&self) -> f64 {
        self.state.grid_size
    }

    pub fn set_grid_size(&mut self, size: f64) {
        self.state.grid_size = size;
        self.notify();
    }

    pub fn show_grid(&self) -> bool {
        self.state.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.state.show_grid = show;
        self.notify();
    }

    /// Round to the grid when snapping is on, identity otherwise.
    pub fn snap_to_grid_value(&self, value: f64) -> f64 {
        if self.state.snap_to_grid {
            snap::snap_value(value, self.state.grid_size)
        } else {
            value
        }
    }

    pub fn snap_to_grid_position(&self, point: Point) -> Point {
        Point::new(
            self.snap_to_grid_value(point.x),
            self.snap_to_grid_value(point.y),
        )
    }

    // --- default styling ---

    pub fn default_fill(&self) -> Rgba {
        self.state.default_fill
    }

    pub fn set_default_fill(&mut self, fill: Rgba) {
        self.state.default_fill = fill;
        self.notify();
    }

    pub fn default_stroke(&self) -> Rgba {
        self.state.default_stroke
    }

    pub fn set_default_stroke(&mut self, stroke: Rgba) {
        self.state.default_stroke = stroke;
        self.notify();
    }

    pub fn default_stroke_width(&self) -> f64 {
        self.state.default_stroke_width
    }

    pub fn set_default_stroke_width(&mut self, width: f64) {
        self.state.default_stroke_width = width;
        self.notify();
    }

    // --- overlay ---

    pub fn overlay(&self) -> &Overlay {
        &self.state.overlay
    }

    /// Live origin for a shape being dragged.
    pub fn set_drag_position(&mut self, id: ShapeId, origin: Point) {
        self.state.overlay.drag_positions.insert(id, origin);
        self.notify();
    }

    /// Set several live origins with a single notification.
    pub fn set_drag_positions(&mut self, positions: impl IntoIterator<Item = (ShapeId, Point)>) {
        self.state.overlay.drag_positions.extend(positions);
        self.notify();
    }

    pub fn set_preview(&mut self, preview: Option<Shape>) {
        self.state.overlay.preview = preview;
        self.notify();
    }

    pub fn clear_overlay(&mut self) {
        self.state.overlay = Overlay::default();
        self.notify();
    }

    /// Drop every in-progress gesture: overlay, selection box and gesture
    /// flags. The selection itself is kept.
    pub fn cancel_gesture(&mut self) {
        self.state.overlay = Overlay::default();
        self.state.selection_box = None;
        self.state.is_dragging = false;
        self.state.is_drawing = false;
        self.state.drag_start = None;
        self.notify();
    }
}
