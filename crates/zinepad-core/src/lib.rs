//! Zinepad Core Library
//!
//! Platform-agnostic editing engine for the Zinepad page designer: the shape
//! model, the persisted document, transient session state, undoable commands
//! and the pointer-driven tools that tie them together.

pub mod commands;
pub mod config;
pub mod document;
pub mod editor;
pub mod input;
pub mod observer;
pub mod selection;
pub mod session;
pub mod shapes;
pub mod snap;
pub mod storage;
pub mod tools;
pub mod viewport;

pub use commands::{Command, CommandManager, HistoryStatus};
pub use config::EditorConfig;
pub use document::{Document, DocumentStore, Page, PageId, PagePatch};
pub use editor::{Editor, EditorContext, Frame};
pub use input::{Key, Modifiers, PointerEvent, WheelEvent};
pub use observer::{Observers, Subscription};
pub use selection::{Selection, SelectionBox};
pub use session::{SessionState, SessionStore};
pub use shapes::{Rgba, Shape, ShapeId, ShapeKind, ShapeProperty};
pub use snap::{snap_to_grid, GRID_SIZE};
pub use storage::{Storage, StorageError, StorageResult};
pub use tools::{Tool, ToolKind};
pub use viewport::Viewport;
