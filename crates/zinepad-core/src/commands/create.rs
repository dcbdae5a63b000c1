//! Shape creation.

use super::{Command, CommandId};
use crate::document::{DocumentStore, PageId};
use crate::shapes::{Shape, ShapeId};
use std::cell::Cell;
use uuid::Uuid;

/// Add one shape on top of a page.
#[derive(Debug, Clone)]
pub struct CreateShape {
    id: CommandId,
    page_id: PageId,
    shape: Shape,
    /// Whether the last execute actually inserted the shape.
    inserted: Cell<bool>,
}

impl CreateShape {
    pub fn new(page_id: impl Into<PageId>, shape: Shape) -> Self {
        Self {
            id: Uuid::new_v4(),
            page_id: page_id.into(),
            shape,
            inserted: Cell::new(false),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Command for CreateShape {
    fn id(&self) -> CommandId {
        self.id
    }

    fn page_id(&self) -> &str {
        &self.page_id
    }

    fn execute(&self, store: &mut DocumentStore) {
        let present = store.document().contains_shape(self.shape.id());
        if !present {
            store.add_shape(&self.page_id, self.shape.clone());
        }
        self.inserted.set(!present);
    }

    fn undo(&self, store: &mut DocumentStore) {
        if self.inserted.replace(false) {
            store.remove_shape(&self.page_id, self.shape.id());
        }
    }

    fn description(&self) -> String {
        format!("Create {}", self.shape.type_name())
    }

    fn affected_ids(&self) -> Vec<ShapeId> {
        vec![self.shape.id()]
    }
}
