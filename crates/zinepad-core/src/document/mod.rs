//! Document and page data.

mod store;

pub use store::DocumentStore;

use crate::shapes::{Rgba, Shape, ShapeId};
use chrono::{DateTime, Utc};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Schema version written to, and required from, persisted documents.
pub const DOCUMENT_VERSION: u32 = 1;

pub type PageId = String;

/// Structural problems found in a deserialized document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDocument {
    #[error("document has no pages")]
    NoPages,
    #[error("active page {0:?} does not exist")]
    DanglingActivePage(PageId),
    #[error("shape id {0} is used more than once")]
    DuplicateShapeId(ShapeId),
}

/// A page: fixed-size artboard holding shapes in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub background_color: Rgba,
    /// Back to front.
    pub shapes: Vec<Shape>,
}

impl Page {
    /// Empty 800x600 white page.
    pub fn new(id: impl Into<PageId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width: 800.0,
            height: 600.0,
            background_color: Rgba::white(),
            shapes: Vec::new(),
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub(crate) fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Paint-order index of a shape.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    /// Topmost visible shape whose bounds contain `point`.
    pub fn shape_at(&self, point: Point) -> Option<&Shape> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.visible && s.contains(point))
    }

    /// Visible shapes whose bounds touch `rect`, back to front.
    pub fn shapes_in_rect(&self, rect: Rect) -> Vec<ShapeId> {
        let rect = rect.abs();
        self.shapes
            .iter()
            .filter(|s| s.visible && overlaps(rect, s.bounds()))
            .map(Shape::id)
            .collect()
    }

    /// Page area in page coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

// Inclusive test so zero-width or zero-height shapes (straight lines) still match.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Partial page update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PagePatch {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background_color: Option<Rgba>,
}

impl PagePatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn background(mut self, color: Rgba) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.background_color.is_none()
    }

    /// Apply to `page`. Returns `true` if any field was set.
    pub fn apply_to(&self, page: &mut Page) -> bool {
        if let Some(name) = &self.name {
            page.name.clone_from(name);
        }
        if let Some(width) = self.width {
            page.width = width;
        }
        if let Some(height) = self.height {
            page.height = height;
        }
        if let Some(color) = self.background_color {
            page.background_color = color;
        }
        !self.is_empty()
    }
}

/// The persisted document: an ordered list of pages, one of them active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub version: u32,
    pub pages: Vec<Page>,
    pub active_page_id: PageId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Document {
    fn default() -> Self {
        let now = Utc::now();
        let page = Page::new("page-1", "Page 1");
        Self {
            id: "doc-1".to_string(),
            version: DOCUMENT_VERSION,
            active_page_id: page.id.clone(),
            pages: vec![page],
            created_at: now,
            updated_at: now,
        }
    }
}

impl Document {
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub(crate) fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Whether any page holds a shape with this id.
    pub fn contains_shape(&self, id: ShapeId) -> bool {
        self.pages.iter().any(|p| p.shape(id).is_some())
    }

    /// The active page, falling back to the first page.
    pub fn active_page(&self) -> &Page {
        match self.page(&self.active_page_id) {
            Some(page) => page,
            None => &self.pages[0],
        }
    }

    /// Check the structural invariants a loaded document must satisfy.
    pub fn validate(&self) -> Result<(), InvalidDocument> {
        if self.pages.is_empty() {
            return Err(InvalidDocument::NoPages);
        }
        if self.page(&self.active_page_id).is_none() {
            return Err(InvalidDocument::DanglingActivePage(
                self.active_page_id.clone(),
            ));
        }
        let mut seen = HashSet::new();
        for shape in self.pages.iter().flat_map(|p| p.shapes.iter()) {
            if !seen.insert(shape.id()) {
                return Err(InvalidDocument::DuplicateShapeId(shape.id()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Rectangle};

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.version, 1);
        assert_eq!(doc.pages.len(), 1);
        let page = doc.active_page();
        assert_eq!(page.id, "page-1");
        assert_eq!(page.name, "Page 1");
        assert!((page.width - 800.0).abs() < f64::EPSILON);
        assert!((page.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(page.background_color, Rgba::white());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(Document::default()).unwrap();
        assert_eq!(json["activePageId"], "page-1");
        assert_eq!(json["pages"][0]["backgroundColor"], "#ffffff");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_shape_at_prefers_topmost_visible() {
        let mut page = Page::new("p", "P");
        let bottom = Shape::new(Point::ZERO, Rectangle::new(100.0, 100.0));
        let mut hidden = Shape::new(Point::ZERO, Rectangle::new(100.0, 100.0));
        hidden.visible = false;
        let bottom_id = bottom.id();
        page.shapes.push(bottom);
        page.shapes.push(hidden);
        assert_eq!(page.shape_at(Point::new(50.0, 50.0)).map(Shape::id), Some(bottom_id));
        assert!(page.shape_at(Point::new(500.0, 50.0)).is_none());
    }

    #[test]
    fn test_shapes_in_rect_includes_flat_lines() {
        let mut page = Page::new("p", "P");
        let line = Shape::new(Point::new(10.0, 10.0), Line::segment(50.0, 0.0));
        let far = Shape::new(Point::new(500.0, 500.0), Rectangle::new(10.0, 10.0));
        let line_id = line.id();
        page.shapes.push(line);
        page.shapes.push(far);
        assert_eq!(
            page.shapes_in_rect(Rect::new(40.0, 0.0, 0.0, 20.0)),
            vec![line_id]
        );
    }

    #[test]
    fn test_page_patch() {
        let mut page = Page::new("p", "P");
        assert!(!PagePatch::default().apply_to(&mut page));
        let patch = PagePatch::default().name("Back cover").size(400.0, 300.0);
        assert!(patch.apply_to(&mut page));
        assert_eq!(page.name, "Back cover");
        assert!((page.width - 400.0).abs() < f64::EPSILON);
        assert_eq!(page.background_color, Rgba::white());
    }

    #[test]
    fn test_validate_detects_duplicate_ids() {
        let mut doc = Document::default();
        let shape = Shape::new(Point::ZERO, Rectangle::new(1.0, 1.0));
        doc.pages[0].shapes.push(shape.clone());
        doc.pages[0].shapes.push(shape.clone());
        assert_eq!(
            doc.validate(),
            Err(InvalidDocument::DuplicateShapeId(shape.id()))
        );
    }
}
