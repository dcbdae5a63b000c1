//! Single-field shape edits.

use super::{Command, CommandId};
use crate::document::{DocumentStore, PageId};
use crate::shapes::{ShapeId, ShapeProperty};
use uuid::Uuid;

/// Change a single field of one shape.
#[derive(Debug, Clone)]
pub struct UpdateShapeProperty {
    id: CommandId,
    page_id: PageId,
    shape_id: ShapeId,
    old_value: ShapeProperty,
    new_value: ShapeProperty,
}

impl UpdateShapeProperty {
    /// `old_value` and `new_value` must name the same field.
    pub fn new(
        page_id: impl Into<PageId>,
        shape_id: ShapeId,
        old_value: ShapeProperty,
        new_value: ShapeProperty,
    ) -> Self {
        debug_assert_eq!(old_value.key(), new_value.key());
        Self {
            id: Uuid::new_v4(),
            page_id: page_id.into(),
            shape_id,
            old_value,
            new_value,
        }
    }

    /// Read the current value from the store. `None` if the shape is missing
    /// or has no such field.
    pub fn capture(
        store: &DocumentStore,
        page_id: impl Into<PageId>,
        shape_id: ShapeId,
        new_value: ShapeProperty,
    ) -> Option<Self> {
        let page_id = page_id.into();
        let old_value = store
            .shape(&page_id, shape_id)?
            .property(new_value.key())?;
        Some(Self::new(page_id, shape_id, old_value, new_value))
    }
}

impl Command for UpdateShapeProperty {
    fn id(&self) -> CommandId {
        self.id
    }

    fn page_id(&self) -> &str {
        &self.page_id
    }

    fn execute(&self, store: &mut DocumentStore) {
        store.update_shape(
            &self.page_id,
            self.shape_id,
            std::slice::from_ref(&self.new_value),
        );
    }

    fn undo(&self, store: &mut DocumentStore) {
        store.update_shape(
            &self.page_id,
            self.shape_id,
            std::slice::from_ref(&self.old_value),
        );
    }

    fn description(&self) -> String {
        format!("Update {}", self.new_value.key().name())
    }

    fn affected_ids(&self) -> Vec<ShapeId> {
        vec![self.shape_id]
    }
}
