//! Translating a set of shapes.

use super::{Command, CommandId};
use crate::document::{DocumentStore, PageId};
use crate::shapes::ShapeId;
use kurbo::Vec2;
use uuid::Uuid;

/// Translate several shapes by the same delta.
#[derive(Debug, Clone)]
pub struct MoveShapes {
    id: CommandId,
    page_id: PageId,
    shape_ids: Vec<ShapeId>,
    delta: Vec2,
}

impl MoveShapes {
    pub fn new(page_id: impl Into<PageId>, shape_ids: Vec<ShapeId>, delta: Vec2) -> Self {
        Self {
            id: Uuid::new_v4(),
            page_id: page_id.into(),
            shape_ids,
            delta,
        }
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }
}

impl Command for MoveShapes {
    fn id(&self) -> CommandId {
        self.id
    }

    fn page_id(&self) -> &str {
        &self.page_id
    }

    fn execute(&self, store: &mut DocumentStore) {
        store.move_shapes(&self.page_id, &self.shape_ids, self.delta.x, self.delta.y);
    }

    fn undo(&self, store: &mut DocumentStore) {
        store.move_shapes(&self.page_id, &self.shape_ids, -self.delta.x, -self.delta.y);
    }

    fn description(&self) -> String {
        format!("Move {} shape(s)", self.shape_ids.len())
    }

    fn affected_ids(&self) -> Vec<ShapeId> {
        self.shape_ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Shape};
    use kurbo::Point;

    #[test]
    fn test_move_and_back() {
        let mut store = DocumentStore::new();
        let shape = Shape::new(Point::new(5.0, 5.0), Line::segment(10.0, 10.0));
        let id = shape.id();
        store.add_shape("page-1", shape.clone());

        let cmd = MoveShapes::new("page-1", vec![id], Vec2::new(30.0, -20.0));
        cmd.execute(&mut store);
        assert_eq!(store.shape("page-1", id).unwrap().origin(), Point::new(35.0, -15.0));

        cmd.undo(&mut store);
        assert_eq!(store.shape("page-1", id), Some(&shape));
    }
}
