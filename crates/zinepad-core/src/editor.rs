//! Editor facade: the stores, the history and the active tool.

use crate::commands::{Command, CommandManager, DeleteShapes};
use crate::config::EditorConfig;
use crate::document::{DocumentStore, PageId};
use crate::input::{Key, PointerEvent, WheelEvent};
use crate::session::SessionStore;
use crate::shapes::{Rgba, Shape, ShapeId};
use crate::storage::Storage;
use crate::tools::{create_tool, Tool, ToolKind};
use crate::viewport::Viewport;
use kurbo::{Point, Rect};

/// Everything a tool may read or change.
///
/// The document and the session are independent; tools are the only code
/// that touches both.
#[derive(Debug, Default)]
pub struct EditorContext {
    pub document: DocumentStore,
    pub session: SessionStore,
    pub commands: CommandManager,
}

impl EditorContext {
    pub fn new(document: DocumentStore, session: SessionStore, commands: CommandManager) -> Self {
        Self {
            document,
            session,
            commands,
        }
    }

    /// Execute and record a command against the document.
    pub fn execute(&mut self, command: impl Command + 'static) {
        self.commands.execute(command, &mut self.document);
    }

    pub fn undo(&mut self) -> bool {
        self.commands.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> bool {
        self.commands.redo(&mut self.document)
    }

    pub fn active_page_id(&self) -> PageId {
        self.document.active_page_id().to_string()
    }

    /// Convert a screen point through the current viewport.
    pub fn world_position(&self, screen: Point) -> Point {
        self.session.screen_to_world(screen)
    }
}

/// What a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub page_id: PageId,
    pub width: f64,
    pub height: f64,
    pub background: Rgba,
    pub viewport: Viewport,
    /// Back to front, live drag positions applied.
    pub shapes: Vec<Shape>,
    /// Selected shapes present on the page.
    pub selected: Vec<ShapeId>,
    pub selection_box: Option<Rect>,
    pub preview: Option<Shape>,
    pub show_grid: bool,
    pub grid_size: f64,
}

/// Stores, history and the active tool wired together.
#[derive(Debug)]
pub struct Editor {
    ctx: EditorContext,
    tool: Box<dyn Tool>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

impl Editor {
    /// Editor over an in-memory document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor over an in-memory document using `config`.
    pub fn with_config(config: &EditorConfig) -> Self {
        Self::from_context(EditorContext::new(
            DocumentStore::new(),
            SessionStore::from_config(config),
            CommandManager::new(config.history_limit),
        ))
    }

    /// Editor over the document persisted in `storage` under
    /// `config.storage_key`.
    pub fn open(storage: Box<dyn Storage>, config: &EditorConfig) -> Self {
        Self::from_context(EditorContext::new(
            DocumentStore::open(storage, config.storage_key.clone()),
            SessionStore::from_config(config),
            CommandManager::new(config.history_limit),
        ))
    }

    pub fn from_context(mut ctx: EditorContext) -> Self {
        let mut tool = create_tool(ctx.session.current_tool());
        tool.activate(&mut ctx);
        Self { ctx, tool }
    }

    pub fn context(&self) -> &EditorContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.ctx
    }

    pub fn document(&self) -> &DocumentStore {
        &self.ctx.document
    }

    pub fn session(&self) -> &SessionStore {
        &self.ctx.session
    }

    pub fn commands(&self) -> &CommandManager {
        &self.ctx.commands
    }

    pub fn tool(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn cursor(&self) -> &'static str {
        self.tool.cursor()
    }

    /// Switch tools, cancelling whatever the old tool was doing.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tool.deactivate(&mut self.ctx);
        self.ctx.session.set_current_tool(kind);
        self.tool = create_tool(kind);
        self.tool.activate(&mut self.ctx);
        log::debug!("tool: {}", kind);
    }

    /// Abandon the gesture in progress, keeping the current tool.
    pub fn cancel_gesture(&mut self) {
        self.tool.deactivate(&mut self.ctx);
        self.tool.activate(&mut self.ctx);
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        self.tool.on_pointer_down(&mut self.ctx, event)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        self.tool.on_pointer_move(&mut self.ctx, event)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        self.tool.on_pointer_up(&mut self.ctx, event)
    }

    pub fn wheel(&mut self, event: &WheelEvent) -> bool {
        self.tool.on_wheel(&mut self.ctx, event)
    }

    /// Delete/Backspace remove the selection, Escape cancels the gesture.
    pub fn key_down(&mut self, key: &Key) -> bool {
        match key {
            Key::Delete | Key::Backspace => self.delete_selected(),
            Key::Escape => {
                self.cancel_gesture();
                true
            }
            Key::Other(_) => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        self.ctx.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        self.ctx.redo()
    }

    /// Delete every selected shape on the active page as one undoable step,
    /// then clear the selection. Returns `false` when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let page_id = self.ctx.active_page_id();
        let page = self.ctx.document.active_page();
        let ids: Vec<ShapeId> = self
            .ctx
            .session
            .selection()
            .iter()
            .filter(|id| page.shape(*id).is_some())
            .collect();
        if ids.is_empty() {
            return false;
        }
        self.cancel_gesture();
        let command = DeleteShapes::new(&self.ctx.document, page_id, ids);
        self.ctx.execute(command);
        self.ctx.session.clear_selection();
        true
    }

    /// Topmost visible shape under a screen point on the active page.
    pub fn hit_test(&self, screen: Point) -> Option<ShapeId> {
        let world = self.ctx.world_position(screen);
        self.ctx.document.active_page().shape_at(world).map(Shape::id)
    }

    /// Snapshot for rendering the active page.
    pub fn frame(&self) -> Frame {
        let page = self.ctx.document.active_page();
        let state = self.ctx.session.state();
        let overlay = &state.overlay;

        let shapes = page
            .shapes
            .iter()
            .map(|shape| {
                let mut shape = shape.clone();
                if let Some(origin) = overlay.drag_positions.get(&shape.id()) {
                    shape.set_origin(*origin);
                }
                shape
            })
            .collect();

        let selected = state
            .selection
            .iter()
            .filter(|id| page.shape(*id).is_some())
            .collect();

        Frame {
            page_id: page.id.clone(),
            width: page.width,
            height: page.height,
            background: page.background_color,
            viewport: state.viewport,
            shapes,
            selected,
            selection_box: state.selection_box.map(|b| b.rect()),
            preview: overlay.preview.clone(),
            show_grid: state.show_grid,
            grid_size: state.grid_size,
        }
    }
}
