//! Freehand strokes.

use super::{Tool, ToolKind};
use crate::commands::CreateShape;
use crate::editor::EditorContext;
use crate::input::PointerEvent;
use crate::shapes::{Freehand, Shape};
use kurbo::{Point, Rect};

/// The diagonal of a stroke's bounding box must exceed this (page units) for
/// the stroke to be kept.
pub const MIN_STROKE_EXTENT: f64 = 5.0;

/// Captures a pointer trail and commits it as one freehand shape.
#[derive(Debug, Default)]
pub struct FreehandTool {
    /// Page-space points captured so far; empty when idle.
    points: Vec<Point>,
    drawing: bool,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, ctx: &mut EditorContext) {
        self.points.clear();
        self.drawing = false;
        ctx.session.cancel_gesture();
    }

    fn preview(&self) -> Option<Shape> {
        let (origin, stroke) = Freehand::from_world_points(&self.points)?;
        Some(Shape::new(origin, stroke))
    }

    fn extent(&self) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        let bounds = self
            .points
            .iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p));
        bounds.width().hypot(bounds.height())
    }
}

impl Tool for FreehandTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Freehand
    }

    fn cursor(&self) -> &'static str {
        "crosshair"
    }

    fn deactivate(&mut self, ctx: &mut EditorContext) {
        self.reset(ctx);
    }

    fn on_pointer_down(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let world = ctx.world_position(event.position);
        self.points.clear();
        self.points.push(world);
        self.drawing = true;
        ctx.session.set_drag_start(Some(world));
        ctx.session.set_drawing(true);
        ctx.session.set_preview(self.preview());
        true
    }

    fn on_pointer_move(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        if !self.drawing {
            return false;
        }
        self.points.push(ctx.world_position(event.position));
        ctx.session.set_preview(self.preview());
        true
    }

    fn on_pointer_up(&mut self, ctx: &mut EditorContext, _event: &PointerEvent) -> bool {
        if !self.drawing || self.points.len() < 2 || self.extent() <= MIN_STROKE_EXTENT {
            log::trace!("freehand: {} point(s) discarded", self.points.len());
            self.reset(ctx);
            return false;
        }

        let shape = self.preview();
        self.reset(ctx);
        if let Some(shape) = shape {
            let page_id = ctx.active_page_id();
            ctx.execute(CreateShape::new(page_id, shape));
        }
        true
    }
}
