//! Whole-shape edits captured as before/after property sets.

use super::{Command, CommandId};
use crate::document::{DocumentStore, PageId};
use crate::shapes::{Shape, ShapeId, ShapeProperty};
use uuid::Uuid;

/// Replace a shape's geometry and styling wholesale.
#[derive(Debug, Clone)]
pub struct TransformShape {
    id: CommandId,
    page_id: PageId,
    shape_id: ShapeId,
    old_properties: Vec<ShapeProperty>,
    new_properties: Vec<ShapeProperty>,
}

impl TransformShape {
    pub fn new(
        page_id: impl Into<PageId>,
        shape_id: ShapeId,
        old_properties: Vec<ShapeProperty>,
        new_properties: Vec<ShapeProperty>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            page_id: page_id.into(),
            shape_id,
            old_properties,
            new_properties,
        }
    }

    /// Build from two snapshots of the same shape.
    pub fn between(page_id: impl Into<PageId>, before: &Shape, after: &Shape) -> Self {
        if before.id() != after.id() {
            log::warn!(
                "TransformShape between different shapes ({} -> {})",
                before.id(),
                after.id()
            );
        }
        Self::new(page_id, after.id(), before.properties(), after.properties())
    }
}

impl Command for TransformShape {
    fn id(&self) -> CommandId {
        self.id
    }

    fn page_id(&self) -> &str {
        &self.page_id
    }

    fn execute(&self, store: &mut DocumentStore) {
        store.update_shape(&self.page_id, self.shape_id, &self.new_properties);
    }

    fn undo(&self, store: &mut DocumentStore) {
        store.update_shape(&self.page_id, self.shape_id, &self.old_properties);
    }

    fn description(&self) -> String {
        "Transform shape".to_string()
    }

    fn affected_ids(&self) -> Vec<ShapeId> {
        vec![self.shape_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;
    use kurbo::Point;

    #[test]
    fn test_between_snapshots() {
        let mut store = DocumentStore::new();
        let before = Shape::new(Point::new(0.0, 0.0), Rectangle::new(10.0, 10.0));
        let id = before.id();
        store.add_shape("page-1", before.clone());

        let mut after = before.clone();
        after.set_origin(Point::new(40.0, 40.0));
        after.rotation = 45.0;
        after.apply(ShapeProperty::Width(80.0));

        let cmd = TransformShape::between("page-1", &before, &after);
        cmd.execute(&mut store);
        assert_eq!(store.shape("page-1", id), Some(&after));

        cmd.undo(&mut store);
        assert_eq!(store.shape("page-1", id), Some(&before));
    }
}
