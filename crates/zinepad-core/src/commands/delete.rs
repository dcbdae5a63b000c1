//! Deleting shapes with paint order restored on undo.

use super::{Command, CommandId};
use crate::document::{DocumentStore, PageId};
use crate::shapes::{Shape, ShapeId};
use uuid::Uuid;

/// Remove several shapes at once.
///
/// The removed shapes and their paint-order positions are captured when the
/// command is built, so undo puts each one back exactly where it was.
#[derive(Debug, Clone)]
pub struct DeleteShapes {
    id: CommandId,
    page_id: PageId,
    shape_ids: Vec<ShapeId>,
    removed: Vec<(usize, Shape)>,
}

impl DeleteShapes {
    pub fn new(store: &DocumentStore, page_id: impl Into<PageId>, shape_ids: Vec<ShapeId>) -> Self {
        let page_id = page_id.into();
        let removed = store
            .shapes(&page_id)
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape_ids.contains(&shape.id()))
            .map(|(index, shape)| (index, shape.clone()))
            .collect();
        Self {
            id: Uuid::new_v4(),
            page_id,
            shape_ids,
            removed,
        }
    }

    /// Snapshots that undo restores, with their original indices.
    pub fn removed(&self) -> &[(usize, Shape)] {
        &self.removed
    }
}

impl Command for DeleteShapes {
    fn id(&self) -> CommandId {
        self.id
    }

    fn page_id(&self) -> &str {
        &self.page_id
    }

    fn execute(&self, store: &mut DocumentStore) {
        store.remove_shapes(&self.page_id, &self.shape_ids);
    }

    fn undo(&self, store: &mut DocumentStore) {
        store.insert_shapes(&self.page_id, self.removed.clone());
    }

    fn description(&self) -> String {
        format!("Delete {} shape(s)", self.shape_ids.len())
    }

    fn affected_ids(&self) -> Vec<ShapeId> {
        self.shape_ids.clone()
    }
}
