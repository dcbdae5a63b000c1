//! Text placement.

use super::{Tool, ToolKind};
use crate::commands::CreateShape;
use crate::editor::EditorContext;
use crate::input::PointerEvent;
use crate::shapes::{Shape, Text};

/// Placeholder content for newly placed text boxes.
pub const PLACEHOLDER_TEXT: &str = "Double-click to edit";

/// Places a text box on click and selects it.
#[derive(Debug, Default)]
pub struct TextTool;

impl TextTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for TextTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Text
    }

    fn cursor(&self) -> &'static str {
        "text"
    }

    fn deactivate(&mut self, _ctx: &mut EditorContext) {}

    fn on_pointer_down(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let world = ctx.world_position(event.position);
        let shape = Shape::new(world, Text::new(PLACEHOLDER_TEXT));
        let id = shape.id();
        let page_id = ctx.active_page_id();
        ctx.execute(CreateShape::new(page_id, shape));
        ctx.session.set_selection([id]);
        true
    }

    fn on_pointer_move(&mut self, _ctx: &mut EditorContext, _event: &PointerEvent) -> bool {
        false
    }

    fn on_pointer_up(&mut self, _ctx: &mut EditorContext, _event: &PointerEvent) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;
    use kurbo::Point;

    #[test]
    fn test_click_places_selected_placeholder() {
        let mut ctx = EditorContext::default();
        ctx.session.set_zoom(2.0);
        let mut tool = TextTool::new();

        assert!(tool.on_pointer_down(&mut ctx, &PointerEvent::at(Point::new(100.0, 60.0))));

        let shapes = ctx.document.shapes("page-1");
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].origin(), Point::new(50.0, 30.0));
        assert_eq!(ctx.session.selected_ids(), &[shapes[0].id()]);
        match &shapes[0].kind {
            ShapeKind::Text(text) => {
                assert_eq!(text.text, PLACEHOLDER_TEXT);
                assert!((text.font_size - 16.0).abs() < f64::EPSILON);
                assert_eq!(text.font_family, "Arial, sans-serif");
                assert!((text.width - 200.0).abs() < f64::EPSILON);
            }
            other => panic!("expected text, got {}", other.name()),
        }
    }

    #[test]
    fn test_each_click_is_undoable() {
        let mut ctx = EditorContext::default();
        let mut tool = TextTool::new();
        tool.on_pointer_down(&mut ctx, &PointerEvent::at(Point::ZERO));
        tool.on_pointer_down(&mut ctx, &PointerEvent::at(Point::new(0.0, 40.0)));
        assert_eq!(ctx.commands.len(), 2);

        assert!(ctx.undo());
        assert_eq!(ctx.document.shapes("page-1").len(), 1);
        assert!(!tool.on_pointer_up(&mut ctx, &PointerEvent::at(Point::ZERO)));
    }
}
