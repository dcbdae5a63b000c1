//! Tool system: one state machine per tool turning pointer input into edits.
//!
//! A tool reads and writes the session (previews, viewport, selection) and
//! commits document changes only through commands. Every handler returns
//! `true` when it consumed the event.

mod freehand;
mod pan;
mod select;
mod shape;
mod text;

pub use freehand::FreehandTool;
pub use pan::PanTool;
pub use select::SelectTool;
pub use shape::{DragShape, ShapeTool};
pub use text::TextTool;

use crate::editor::EditorContext;
use crate::input::{PointerEvent, WheelEvent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    Rectangle,
    Circle,
    Text,
    Image,
    Line,
    Arrow,
    Freehand,
}

impl ToolKind {
    pub const ALL: [ToolKind; 9] = [
        ToolKind::Select,
        ToolKind::Pan,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Text,
        ToolKind::Image,
        ToolKind::Line,
        ToolKind::Arrow,
        ToolKind::Freehand,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Pan => "pan",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Text => "text",
            ToolKind::Image => "image",
            ToolKind::Line => "line",
            ToolKind::Arrow => "arrow",
            ToolKind::Freehand => "freehand",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interaction state machine for one tool.
pub trait Tool: fmt::Debug {
    fn kind(&self) -> ToolKind;

    /// CSS cursor name for the canvas.
    fn cursor(&self) -> &'static str;

    fn activate(&mut self, _ctx: &mut EditorContext) {}

    /// Cancel any gesture in progress without committing it.
    fn deactivate(&mut self, ctx: &mut EditorContext);

    fn on_pointer_down(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool;

    fn on_pointer_move(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool;

    fn on_pointer_up(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool;

    fn on_wheel(&mut self, _ctx: &mut EditorContext, _event: &WheelEvent) -> bool {
        false
    }
}

/// Build the state machine for `kind`.
pub fn create_tool(kind: ToolKind) -> Box<dyn Tool> {
    match kind {
        ToolKind::Select => Box::new(SelectTool::new()),
        // Images are placed by the host; on the canvas the tool selects.
        ToolKind::Image => Box::new(SelectTool::with_kind(ToolKind::Image)),
        ToolKind::Pan => Box::new(PanTool::new()),
        ToolKind::Rectangle => Box::new(ShapeTool::new(DragShape::Rectangle)),
        ToolKind::Circle => Box::new(ShapeTool::new(DragShape::Circle)),
        ToolKind::Line => Box::new(ShapeTool::new(DragShape::Line)),
        ToolKind::Arrow => Box::new(ShapeTool::new(DragShape::Arrow)),
        ToolKind::Text => Box::new(TextTool::new()),
        ToolKind::Freehand => Box::new(FreehandTool::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tool_reports_kind() {
        for kind in ToolKind::ALL {
            assert_eq!(create_tool(kind).kind(), kind, "{kind}");
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ToolKind::Freehand).unwrap();
        assert_eq!(json, "\"freehand\"");
        for kind in ToolKind::ALL {
            let back: ToolKind =
                serde_json::from_str(&format!("\"{}\"", kind.name())).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_cursors() {
        assert_eq!(create_tool(ToolKind::Select).cursor(), "default");
        assert_eq!(create_tool(ToolKind::Pan).cursor(), "grab");
        assert_eq!(create_tool(ToolKind::Rectangle).cursor(), "crosshair");
        assert_eq!(create_tool(ToolKind::Text).cursor(), "text");
    }
}
