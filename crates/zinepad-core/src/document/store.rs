//! Owner of the document: queries, edits, persistence and change notification.

use super::{Document, Page, PageId, PagePatch};
use crate::observer::{Observers, Subscription};
use crate::shapes::{Shape, ShapeId, ShapeProperty};
use crate::storage::{self, Storage, StorageError, DEFAULT_STORAGE_KEY};
use chrono::Utc;
use std::collections::HashSet;
use std::fmt;

/// Holds exactly one [`Document`].
///
/// Every call that changes the document bumps `updated_at`, writes the whole
/// document to the attached storage (if any) and then notifies listeners in
/// registration order. Calls naming a missing page or shape change nothing
/// and notify no one.
pub struct DocumentStore {
    document: Document,
    storage: Option<Box<dyn Storage>>,
    key: String,
    observers: Observers<Document>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("document", &self.document.id)
            .field("key", &self.key)
            .field("persistent", &self.storage.is_some())
            .field("observers", &self.observers)
            .finish()
    }
}

impl DocumentStore {
    /// In-memory store holding the default document.
    pub fn new() -> Self {
        Self::with_document(Document::default())
    }

    /// In-memory store holding `document`. A document that fails validation
    /// is replaced by the default one.
    pub fn with_document(document: Document) -> Self {
        let document = match document.validate() {
            Ok(()) => document,
            Err(reason) => {
                log::warn!("Discarding invalid document {}: {}", document.id, reason);
                Document::default()
            }
        };
        Self {
            document,
            storage: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
            observers: Observers::new(),
        }
    }

    /// Load the document stored under `key`, falling back to the default
    /// document when it is missing, unreadable or of another schema version.
    /// Later edits are written back under the same key.
    pub fn open(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let document = match storage::load_document(storage.as_ref(), &key) {
            Ok(document) => {
                log::info!("Loaded document {} from {:?}", document.id, key);
                document
            }
            Err(StorageError::NotFound(_)) => {
                log::debug!("No saved document under {:?}, starting fresh", key);
                Document::default()
            }
            Err(e) => {
                log::warn!("Discarding saved document under {:?}: {}", key, e);
                Document::default()
            }
        };
        Self {
            document,
            storage: Some(storage),
            key,
            observers: Observers::new(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn subscribe(&self, listener: impl Fn(&Document) + 'static) -> Subscription {
        self.observers.subscribe(listener)
    }

    fn commit(&mut self) {
        self.document.updated_at = Utc::now();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage::save_document(storage.as_ref(), &self.key, &self.document) {
                log::error!("Failed to save document under {:?}: {}", self.key, e);
            }
        }
        self.observers.notify(&self.document);
    }

    // --- queries ---

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_page(&self) -> &Page {
        self.document.active_page()
    }

    pub fn active_page_id(&self) -> &str {
        &self.document.active_page_id
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.document.page(page_id)
    }

    /// Shapes of a page in paint order; empty for an unknown page.
    pub fn shapes(&self, page_id: &str) -> &[Shape] {
        self.page(page_id)
            .map(|p| p.shapes.as_slice())
            .unwrap_or_default()
    }

    pub fn shape(&self, page_id: &str, id: ShapeId) -> Option<&Shape> {
        self.page(page_id).and_then(|p| p.shape(id))
    }

    // --- shape edits ---

    /// Append a shape on top of the page. A shape whose id is already in the
    /// document is refused.
    pub fn add_shape(&mut self, page_id: &str, shape: Shape) {
        if self.document.contains_shape(shape.id()) {
            log::warn!("add_shape: shape {} already exists", shape.id());
            return;
        }
        let Some(page) = self.document.page_mut(page_id) else {
            log::debug!("add_shape: no page {:?}", page_id);
            return;
        };
        page.shapes.push(shape);
        self.commit();
    }

    /// Re-insert shapes at paint-order positions. Entries are applied in
    /// ascending index order; indices past the end append. Shapes whose id is
    /// already in the document are skipped.
    pub fn insert_shapes(&mut self, page_id: &str, mut entries: Vec<(usize, Shape)>) {
        let mut seen = HashSet::new();
        entries.retain(|(_, shape)| {
            let id = shape.id();
            let fresh = !self.document.contains_shape(id) && seen.insert(id);
            if !fresh {
                log::warn!("insert_shapes: shape {} already exists", id);
            }
            fresh
        });
        let Some(page) = self.document.page_mut(page_id) else {
            log::debug!("insert_shapes: no page {:?}", page_id);
            return;
        };
        if entries.is_empty() {
            return;
        }
        entries.sort_by_key(|(index, _)| *index);
        for (index, shape) in entries {
            let at = index.min(page.shapes.len());
            page.shapes.insert(at, shape);
        }
        self.commit();
    }

    pub fn remove_shape(&mut self, page_id: &str, id: ShapeId) {
        self.remove_shapes(page_id, &[id]);
    }

    /// Remove every listed shape. Unknown ids are ignored.
    pub fn remove_shapes(&mut self, page_id: &str, ids: &[ShapeId]) {
        let Some(page) = self.document.page_mut(page_id) else {
            log::debug!("remove_shapes: no page {:?}", page_id);
            return;
        };
        let before = page.shapes.len();
        page.shapes.retain(|s| !ids.contains(&s.id()));
        if page.shapes.len() != before {
            self.commit();
        }
    }

    /// Merge `properties` into a shape. Fields the variant lacks are skipped.
    pub fn update_shape(&mut self, page_id: &str, id: ShapeId, properties: &[ShapeProperty]) {
        let Some(shape) = self
            .document
            .page_mut(page_id)
            .and_then(|p| p.shape_mut(id))
        else {
            log::debug!("update_shape: no shape {} on {:?}", id, page_id);
            return;
        };
        for property in properties {
            if !shape.apply(property.clone()) {
                log::debug!(
                    "update_shape: {} has no {} field",
                    shape.type_name(),
                    property.key().name()
                );
            }
        }
        self.commit();
    }

    /// Translate every listed shape by `(dx, dy)`. Paint order is unchanged.
    pub fn move_shapes(&mut self, page_id: &str, ids: &[ShapeId], dx: f64, dy: f64) {
        let Some(page) = self.document.page_mut(page_id) else {
            log::debug!("move_shapes: no page {:?}", page_id);
            return;
        };
        let delta = kurbo::Vec2::new(dx, dy);
        let mut moved = false;
        for shape in page.shapes.iter_mut().filter(|s| ids.contains(&s.id())) {
            shape.translate(delta);
            moved = true;
        }
        if moved {
            self.commit();
        }
    }

    // --- page edits ---

    pub fn add_page(&mut self, page: Page) {
        if self.document.page(&page.id).is_some() {
            log::warn!("add_page: page {:?} already exists", page.id);
            return;
        }
        self.document.pages.push(page);
        self.commit();
    }

    /// Remove a page. The last remaining page cannot be removed; removing the
    /// active page activates the first remaining one.
    pub fn remove_page(&mut self, page_id: &str) {
        if self.document.pages.len() <= 1 {
            log::debug!("remove_page: refusing to remove the last page");
            return;
        }
        let Some(index) = self.document.pages.iter().position(|p| p.id == page_id) else {
            return;
        };
        self.document.pages.remove(index);
        if self.document.active_page_id == page_id {
            self.document.active_page_id = self.document.pages[0].id.clone();
        }
        self.commit();
    }

    pub fn update_page(&mut self, page_id: &str, patch: &PagePatch) {
        let Some(page) = self.document.page_mut(page_id) else {
            log::debug!("update_page: no page {:?}", page_id);
            return;
        };
        if patch.apply_to(page) {
            self.commit();
        }
    }

    pub fn set_active_page(&mut self, page_id: &str) {
        if self.document.page(page_id).is_none() {
            log::debug!("set_active_page: no page {:?}", page_id);
            return;
        }
        self.document.active_page_id = page_id.to_string();
        self.commit();
    }

    /// Replace the document with a fresh default one.
    pub fn clear(&mut self) {
        self.document = Document::default();
        self.commit();
    }

    /// Id of a page that does not exist yet, `page-N` style.
    pub fn next_page_id(&self) -> PageId {
        (self.document.pages.len() + 1..)
            .map(|n| format!("page-{}", n))
            .find(|id| self.document.page(id).is_none())
            .unwrap_or_default()
    }
}
