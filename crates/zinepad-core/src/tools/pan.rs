//! Viewport panning.

use super::{Tool, ToolKind};
use crate::editor::EditorContext;
use crate::input::{PointerEvent, WheelEvent};
use kurbo::Point;

/// Drags the viewport around in screen space.
#[derive(Debug, Default)]
pub struct PanTool {
    /// Last pointer position while panning.
    last: Option<Point>,
}

impl PanTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panning(&self) -> bool {
        self.last.is_some()
    }
}

impl Tool for PanTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pan
    }

    fn cursor(&self) -> &'static str {
        if self.is_panning() { "grabbing" } else { "grab" }
    }

    fn deactivate(&mut self, _ctx: &mut EditorContext) {
        self.last = None;
    }

    fn on_pointer_down(&mut self, _ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        self.last = Some(event.position);
        true
    }

    fn on_pointer_move(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let Some(last) = self.last else {
            return false;
        };
        let delta = event.position - last;
        ctx.session.pan_viewport(delta.x, delta.y);
        self.last = Some(event.position);
        true
    }

    fn on_pointer_up(&mut self, _ctx: &mut EditorContext, _event: &PointerEvent) -> bool {
        self.last.take().is_some()
    }

    fn on_wheel(&mut self, ctx: &mut EditorContext, event: &WheelEvent) -> bool {
        ctx.session.zoom_viewport(event.delta_y, Some(event.position));
        true
    }
}
