//! Reversible document edits and the undo/redo history.
//!
//! Every change a user makes to a document goes through a [`Command`]
//! executed by the [`CommandManager`]. Commands are immutable once built: all
//! state needed to undo them is captured up front, and the target
//! [`DocumentStore`] is passed in on each call.

mod create;
mod delete;
mod manager;
mod move_shapes;
mod transform;
mod update_property;

pub use create::CreateShape;
pub use delete::DeleteShapes;
pub use manager::{CommandManager, HistoryStatus, DEFAULT_HISTORY_LIMIT};
pub use move_shapes::MoveShapes;
pub use transform::TransformShape;
pub use update_property::UpdateShapeProperty;

use crate::document::DocumentStore;
use crate::shapes::ShapeId;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an executed command.
pub type CommandId = Uuid;

/// A reversible edit against one page of a [`DocumentStore`].
///
/// `undo` must exactly invert `execute` when called on the store state
/// `execute` left behind.
pub trait Command: fmt::Debug {
    fn id(&self) -> CommandId;

    /// Page the command edits.
    fn page_id(&self) -> &str;

    fn execute(&self, store: &mut DocumentStore);

    fn undo(&self, store: &mut DocumentStore);

    fn redo(&self, store: &mut DocumentStore) {
        self.execute(store);
    }

    /// Short label for menus, e.g. "Undo Move 2 shape(s)".
    fn description(&self) -> String;

    /// Shapes the command touches.
    fn affected_ids(&self) -> Vec<ShapeId>;
}
