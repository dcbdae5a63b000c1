//! Drag-to-draw tools: rectangle, circle, line and arrow.

use super::{Tool, ToolKind};
use crate::commands::CreateShape;
use crate::editor::EditorContext;
use crate::input::PointerEvent;
use crate::session::SessionStore;
use crate::shapes::{Arrow, Circle, Line, Rectangle, Shape};
use kurbo::{Point, Rect};

/// Minimum size (page units) a drawn shape must exceed to be kept.
pub const MIN_DRAW_SIZE: f64 = 5.0;

/// Shapes drawn by dragging from an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragShape {
    Rectangle,
    Circle,
    Line,
    Arrow,
}

impl DragShape {
    pub fn tool_kind(self) -> ToolKind {
        match self {
            DragShape::Rectangle => ToolKind::Rectangle,
            DragShape::Circle => ToolKind::Circle,
            DragShape::Line => ToolKind::Line,
            DragShape::Arrow => ToolKind::Arrow,
        }
    }
}

/// Draws one shape per drag, from the press point to the release point.
///
/// Only the overlay preview changes while dragging; the shape is created by a
/// single command on release, and only if it is big enough.
#[derive(Debug)]
pub struct ShapeTool {
    shape: DragShape,
    anchor: Option<Point>,
}

impl ShapeTool {
    pub fn new(shape: DragShape) -> Self {
        Self {
            shape,
            anchor: None,
        }
    }

    /// Shape spanning `anchor` to `current`, styled from the session defaults.
    fn build(&self, session: &SessionStore, anchor: Point, current: Point) -> Shape {
        let fill = session.default_fill();
        let stroke = session.default_stroke();
        let stroke_width = session.default_stroke_width();
        let d = current - anchor;

        match self.shape {
            DragShape::Circle => {
                let mut circle = Circle::new(d.hypot());
                circle.fill = fill;
                circle.stroke = stroke;
                circle.stroke_width = stroke_width;
                Shape::new(anchor, circle)
            }
            DragShape::Line => {
                let mut line = Line::segment(d.x, d.y);
                line.stroke = stroke;
                line.stroke_width = stroke_width;
                Shape::new(anchor, line)
            }
            DragShape::Arrow => {
                let mut arrow = Arrow::segment(d.x, d.y);
                arrow.stroke = stroke;
                arrow.stroke_width = stroke_width;
                Shape::new(anchor, arrow)
            }
            DragShape::Rectangle => {
                let rect = Rect::from_points(anchor, current);
                let mut rectangle = Rectangle::new(rect.width(), rect.height());
                rectangle.fill = fill;
                rectangle.stroke = stroke;
                rectangle.stroke_width = stroke_width;
                Shape::new(rect.origin(), rectangle)
            }
        }
    }

    fn is_large_enough(&self, anchor: Point, current: Point) -> bool {
        let d = current - anchor;
        match self.shape {
            DragShape::Rectangle => d.x.abs() > MIN_DRAW_SIZE && d.y.abs() > MIN_DRAW_SIZE,
            DragShape::Circle | DragShape::Line | DragShape::Arrow => d.hypot() > MIN_DRAW_SIZE,
        }
    }
}

impl Tool for ShapeTool {
    fn kind(&self) -> ToolKind {
        self.shape.tool_kind()
    }

    fn cursor(&self) -> &'static str {
        "crosshair"
    }

    fn deactivate(&mut self, ctx: &mut EditorContext) {
        self.anchor = None;
        ctx.session.cancel_gesture();
    }

    fn on_pointer_down(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let world = ctx.world_position(event.position);
        self.anchor = Some(world);
        let preview = self.build(&ctx.session, world, world);
        ctx.session.set_drag_start(Some(world));
        ctx.session.set_drawing(true);
        ctx.session.set_preview(Some(preview));
        true
    }

    fn on_pointer_move(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        let world = ctx.world_position(event.position);
        let preview = self.build(&ctx.session, anchor, world);
        ctx.session.set_preview(Some(preview));
        true
    }

    fn on_pointer_up(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let Some(anchor) = self.anchor.take() else {
            return false;
        };
        let world = ctx.world_position(event.position);
        ctx.session.cancel_gesture();

        if self.is_large_enough(anchor, world) {
            let shape = self.build(&ctx.session, anchor, world);
            let page_id = ctx.active_page_id();
            ctx.execute(CreateShape::new(page_id, shape));
        } else {
            log::trace!("{}: drag too small, discarded", self.kind());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rgba, ShapeKind};

    fn draw(shape: DragShape, from: Point, to: Point) -> EditorContext {
        let mut ctx = EditorContext::default();
        let mut tool = ShapeTool::new(shape);
        tool.on_pointer_down(&mut ctx, &PointerEvent::at(from));
        tool.on_pointer_move(&mut ctx, &PointerEvent::at(to));
        tool.on_pointer_up(&mut ctx, &PointerEvent::at(to));
        ctx
    }

    #[test]
    fn test_rectangle_is_normalised() {
        let ctx = draw(DragShape::Rectangle, Point::new(100.0, 80.0), Point::new(40.0, 20.0));
        let shapes = ctx.document.shapes("page-1");
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].origin(), Point::new(40.0, 20.0));
        match &shapes[0].kind {
            ShapeKind::Rectangle(r) => {
                assert!((r.width - 60.0).abs() < f64::EPSILON);
                assert!((r.height - 60.0).abs() < f64::EPSILON);
                assert_eq!(r.fill, Rgba::hex(0x4a90d9));
                assert_eq!(r.stroke, Rgba::hex(0x2c5282));
            }
            other => panic!("expected rectangle, got {}", other.name()),
        }
        assert!(ctx.session.overlay().preview.is_none());
        assert!(!ctx.session.is_drawing());
    }

    #[test]
    fn test_each_drag_shape_builds_its_own_variant() {
        let cases = [
            (DragShape::Rectangle, "rectangle"),
            (DragShape::Circle, "circle"),
            (DragShape::Line, "line"),
            (DragShape::Arrow, "arrow"),
        ];
        for (shape, name) in cases {
            let ctx = draw(shape, Point::ZERO, Point::new(40.0, 30.0));
            let shapes = ctx.document.shapes("page-1");
            assert_eq!(shapes.len(), 1, "{name}");
            assert_eq!(shapes[0].type_name(), name);
            assert_eq!(ShapeTool::new(shape).kind().name(), name);
        }
    }

    #[test]
    fn test_small_rectangle_is_discarded() {
        let ctx = draw(DragShape::Rectangle, Point::new(0.0, 0.0), Point::new(100.0, 4.0));
        assert!(ctx.document.shapes("page-1").is_empty());
        assert!(ctx.commands.is_empty());
        assert!(ctx.session.overlay().preview.is_none());
    }

    #[test]
    fn test_circle_radius_is_distance() {
        let ctx = draw(DragShape::Circle, Point::new(50.0, 50.0), Point::new(80.0, 90.0));
        let shape = &ctx.document.shapes("page-1")[0];
        assert_eq!(shape.origin(), Point::new(50.0, 50.0));
        match &shape.kind {
            ShapeKind::Circle(c) => assert!((c.radius - 50.0).abs() < 1e-9),
            other => panic!("expected circle, got {}", other.name()),
        }
    }

    #[test]
    fn test_line_is_local_to_anchor() {
        let ctx = draw(DragShape::Line, Point::new(10.0, 20.0), Point::new(40.0, 60.0));
        let shape = &ctx.document.shapes("page-1")[0];
        assert_eq!(shape.origin(), Point::new(10.0, 20.0));
        match &shape.kind {
            ShapeKind::Line(l) => assert_eq!(l.points, vec![0.0, 0.0, 30.0, 40.0]),
            other => panic!("expected line, got {}", other.name()),
        }
    }

    #[test]
    fn test_short_arrow_is_discarded() {
        let ctx = draw(DragShape::Arrow, Point::new(10.0, 10.0), Point::new(13.0, 14.0));
        assert!(ctx.document.shapes("page-1").is_empty());
    }

    #[test]
    fn test_preview_is_not_in_document() {
        let mut ctx = EditorContext::default();
        let mut tool = ShapeTool::new(DragShape::Arrow);
        tool.on_pointer_down(&mut ctx, &PointerEvent::at(Point::ZERO));
        tool.on_pointer_move(&mut ctx, &PointerEvent::at(Point::new(50.0, 0.0)));
        assert!(ctx.session.is_drawing());
        assert!(ctx.document.shapes("page-1").is_empty());
        assert_eq!(
            ctx.session.overlay().preview.as_ref().map(Shape::type_name),
            Some("arrow")
        );
    }

    #[test]
    fn test_uses_session_styling() {
        let mut ctx = EditorContext::default();
        ctx.session.set_default_stroke(Rgba::black());
        ctx.session.set_default_stroke_width(7.0);
        let mut tool = ShapeTool::new(DragShape::Line);
        tool.on_pointer_down(&mut ctx, &PointerEvent::at(Point::ZERO));
        tool.on_pointer_up(&mut ctx, &PointerEvent::at(Point::new(0.0, 30.0)));
        match &ctx.document.shapes("page-1")[0].kind {
            ShapeKind::Line(l) => {
                assert_eq!(l.stroke, Rgba::black());
                assert!((l.stroke_width - 7.0).abs() < f64::EPSILON);
            }
            other => panic!("expected line, got {}", other.name()),
        }
    }
}
