//! Selection, drag-to-move and rubber-band selection.

use super::{Tool, ToolKind};
use crate::commands::MoveShapes;
use crate::editor::EditorContext;
use crate::input::{PointerEvent, WheelEvent};
use crate::selection::SelectionBox;
use crate::shapes::ShapeId;
use kurbo::{Point, Vec2};

/// Selects shapes and drags them around.
///
/// While dragging, the live positions go to the session overlay only; the
/// document is touched once, by a single [`MoveShapes`] on release.
#[derive(Debug)]
pub struct SelectTool {
    kind: ToolKind,
    /// Origins of the shapes being dragged, captured at pointer down.
    initial_positions: Vec<(ShapeId, Point)>,
    /// Rubber band adds to the selection instead of replacing it.
    additive_box: bool,
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectTool {
    pub fn new() -> Self {
        Self::with_kind(ToolKind::Select)
    }

    /// Select behaviour reported under another tool kind.
    pub fn with_kind(kind: ToolKind) -> Self {
        Self {
            kind,
            initial_positions: Vec::new(),
            additive_box: false,
        }
    }

    fn snapped_delta(ctx: &EditorContext, start: Point, current: Point) -> Vec2 {
        let raw = current - start;
        Vec2::new(
            ctx.session.snap_to_grid_value(raw.x),
            ctx.session.snap_to_grid_value(raw.y),
        )
    }

    fn reset(&mut self) {
        self.initial_positions.clear();
        self.additive_box = false;
    }
}

impl Tool for SelectTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn cursor(&self) -> &'static str {
        "default"
    }

    fn deactivate(&mut self, ctx: &mut EditorContext) {
        self.reset();
        ctx.session.cancel_gesture();
    }

    fn on_pointer_down(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let world = ctx.world_position(event.position);
        let shift = event.modifiers.shift;
        self.reset();

        let target = event
            .target
            .filter(|id| ctx.document.active_page().shape(*id).is_some());

        let Some(id) = target else {
            if !shift {
                ctx.session.clear_selection();
            }
            self.additive_box = shift;
            ctx.session.set_drag_start(Some(world));
            ctx.session.set_selection_box(Some(SelectionBox::new(world)));
            return true;
        };

        if shift {
            ctx.session.toggle_selection(id);
        } else if !ctx.session.is_selected(id) {
            ctx.session.set_selection([id]);
        }

        let page = ctx.document.active_page();
        self.initial_positions = ctx
            .session
            .selection()
            .iter()
            .filter_map(|selected| page.shape(selected))
            .filter(|shape| !shape.locked)
            .map(|shape| (shape.id(), shape.origin()))
            .collect();

        ctx.session.set_drag_start(Some(world));
        ctx.session.set_dragging(true);
        true
    }

    fn on_pointer_move(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let world = ctx.world_position(event.position);

        if ctx.session.is_dragging() {
            let Some(start) = ctx.session.drag_start() else {
                return false;
            };
            let delta = Self::snapped_delta(ctx, start, world);
            let positions: Vec<(ShapeId, Point)> = self
                .initial_positions
                .iter()
                .map(|(id, origin)| (*id, *origin + delta))
                .collect();
            ctx.session.set_drag_positions(positions);
            return true;
        }

        if let Some(mut selection_box) = ctx.session.selection_box() {
            selection_box.current = world;
            ctx.session.set_selection_box(Some(selection_box));
            return true;
        }

        false
    }

    fn on_pointer_up(&mut self, ctx: &mut EditorContext, event: &PointerEvent) -> bool {
        let world = ctx.world_position(event.position);

        if ctx.session.is_dragging() {
            if let Some(start) = ctx.session.drag_start() {
                let delta = Self::snapped_delta(ctx, start, world);
                if delta != Vec2::ZERO && !self.initial_positions.is_empty() {
                    let ids = self.initial_positions.iter().map(|(id, _)| *id).collect();
                    let page_id = ctx.active_page_id();
                    ctx.execute(MoveShapes::new(page_id, ids, delta));
                } else {
                    log::trace!("select: drag below grid step, nothing to commit");
                }
            }
            self.reset();
            ctx.session.cancel_gesture();
            return true;
        }

        if let Some(mut selection_box) = ctx.session.selection_box() {
            selection_box.current = world;
            let rect = selection_box.rect();
            if rect.width() > 0.0 || rect.height() > 0.0 {
                let hits = ctx.document.active_page().shapes_in_rect(rect);
                if self.additive_box {
                    for id in hits {
                        ctx.session.add_to_selection(id);
                    }
                } else {
                    ctx.session.set_selection(hits);
                }
            }
            self.reset();
            ctx.session.cancel_gesture();
            return true;
        }

        ctx.session.set_drag_start(None);
        false
    }

    fn on_wheel(&mut self, ctx: &mut EditorContext, event: &WheelEvent) -> bool {
        ctx.session.zoom_viewport(event.delta_y, Some(event.position));
        true
    }
}
