//! Selection set and rubber-band selection box.

use crate::shapes::ShapeId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Ordered set of selected shape ids.
///
/// Order is the order in which shapes were selected. An id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<ShapeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from arbitrary ids, keeping the first occurrence of
    /// each duplicate.
    pub fn from_ids(ids: impl IntoIterator<Item = ShapeId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(id);
        }
        selection
    }

    /// Append `id`. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: ShapeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| *selected != id);
        self.ids.len() != before
    }

    /// Add `id` if absent, remove it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, id: ShapeId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Replace the whole selection.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        *self = Self::from_ids(ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<ShapeId> {
        self.ids.clone()
    }
}

impl FromIterator<ShapeId> for Selection {
    fn from_iter<I: IntoIterator<Item = ShapeId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

/// Rubber-band rectangle in page coordinates, anchored where the drag began.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub anchor: Point,
    pub current: Point,
}

impl SelectionBox {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    /// Normalised rectangle spanned by the anchor and the current point.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_insert_refuses_duplicates() {
        let id = Uuid::new_v4();
        let mut selection = Selection::new();
        assert!(selection.insert(id));
        assert!(!selection.insert(id));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_from_ids_keeps_first_occurrence() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let selection = Selection::from_ids([b, a, b, a]);
        assert_eq!(selection.as_slice(), &[b, a]);
    }

    #[test]
    fn test_toggle() {
        let a = Uuid::new_v4();
        let mut selection = Selection::new();
        assert!(selection.toggle(a));
        assert!(selection.contains(a));
        assert!(!selection.toggle(a));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut selection = Selection::from_ids([Uuid::new_v4()]);
        assert!(!selection.remove(Uuid::new_v4()));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_selection_box_normalises() {
        let mut sb = SelectionBox::new(Point::new(50.0, 50.0));
        sb.current = Point::new(10.0, 80.0);
        assert_eq!(sb.rect(), Rect::new(10.0, 50.0, 50.0, 80.0));
    }

    #[test]
    fn test_serializes_as_list() {
        let a = Uuid::new_v4();
        let json = serde_json::to_value(Selection::from_ids([a])).unwrap();
        assert!(json.is_array());
    }
}
