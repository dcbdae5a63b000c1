//! Bounded linear undo/redo history.

use super::Command;
use crate::document::DocumentStore;
use std::collections::VecDeque;
use std::fmt;

/// Default number of commands kept in the history.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Snapshot of the history passed to the change callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub current_index: Option<usize>,
    pub len: usize,
    pub undo_description: Option<String>,
    pub redo_description: Option<String>,
}

type ChangeCallback = Box<dyn FnMut(&HistoryStatus)>;

/// Executes commands and keeps them for undo/redo.
///
/// Commands `0..applied` are applied to the document, the rest form the redo
/// branch. Executing a new command discards the redo branch. When the history
/// grows past `max_size` the oldest command is forgotten.
pub struct CommandManager {
    commands: VecDeque<Box<dyn Command>>,
    applied: usize,
    max_size: usize,
    on_change: Option<ChangeCallback>,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl fmt::Debug for CommandManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandManager")
            .field("commands", &self.commands)
            .field("applied", &self.applied)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl CommandManager {
    pub fn new(max_size: usize) -> Self {
        Self {
            commands: VecDeque::new(),
            applied: 0,
            max_size,
            on_change: None,
        }
    }

    /// Register the single change callback, replacing any previous one.
    pub fn set_on_change(&mut self, callback: impl FnMut(&HistoryStatus) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Run `command` and record it.
    pub fn execute(&mut self, command: impl Command + 'static, store: &mut DocumentStore) {
        self.execute_boxed(Box::new(command), store);
    }

    pub fn execute_boxed(&mut self, command: Box<dyn Command>, store: &mut DocumentStore) {
        log::debug!("execute: {}", command.description());
        command.execute(store);

        self.commands.truncate(self.applied);
        self.commands.push_back(command);
        self.applied += 1;

        while self.commands.len() > self.max_size {
            self.commands.pop_front();
            self.applied = self.applied.saturating_sub(1);
        }

        self.changed();
    }

    /// Undo the most recent applied command. Returns `false` if there is none.
    pub fn undo(&mut self, store: &mut DocumentStore) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.applied -= 1;
        let command = &self.commands[self.applied];
        log::debug!("undo: {}", command.description());
        command.undo(store);
        self.changed();
        true
    }

    /// Re-apply the next command on the redo branch. Returns `false` if there
    /// is none.
    pub fn redo(&mut self, store: &mut DocumentStore) -> bool {
        if !self.can_redo() {
            return false;
        }
        let command = &self.commands[self.applied];
        log::debug!("redo: {}", command.description());
        command.redo(store);
        self.applied += 1;
        self.changed();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.commands.len()
    }

    /// Index of the last applied command, `None` when nothing is applied.
    pub fn current_index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Number of recorded commands, applied or not.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.current_index()
            .map(|index| self.commands[index].description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.commands
            .get(self.applied)
            .map(|command| command.description())
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| command.as_ref())
    }

    /// Forget every command. The document is left as it is.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.applied = 0;
        self.changed();
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            current_index: self.current_index(),
            len: self.len(),
            undo_description: self.undo_description(),
            redo_description: self.redo_description(),
        }
    }

    fn changed(&mut self) {
        let status = self.status();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CreateShape, MoveShapes};
    use crate::shapes::{Rectangle, Shape};
    use kurbo::{Point, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create() -> CreateShape {
        CreateShape::new("page-1", Shape::new(Point::ZERO, Rectangle::new(10.0, 10.0)))
    }

    #[test]
    fn test_execute_undo_redo() {
        let mut store = DocumentStore::new();
        let mut manager = CommandManager::default();
        assert!(!manager.can_undo());
        assert_eq!(manager.current_index(), None);

        manager.execute(create(), &mut store);
        assert_eq!(store.shapes("page-1").len(), 1);
        assert_eq!(manager.current_index(), Some(0));

        assert!(manager.undo(&mut store));
        assert!(store.shapes("page-1").is_empty());
        assert!(!manager.undo(&mut store));
        assert_eq!(manager.current_index(), None);

        assert!(manager.redo(&mut store));
        assert_eq!(store.shapes("page-1").len(), 1);
        assert!(!manager.redo(&mut store));
    }

    #[test]
    fn test_history_bound() {
        let mut store = DocumentStore::new();
        let mut manager = CommandManager::new(3);
        for _ in 0..5 {
            manager.execute(create(), &mut store);
        }
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.current_index(), Some(2));

        let mut undone = 0;
        while manager.undo(&mut store) {
            undone += 1;
        }
        assert_eq!(undone, 3);
        assert_eq!(store.shapes("page-1").len(), 2);
    }

    #[test]
    fn test_execute_truncates_redo_branch() {
        let mut store = DocumentStore::new();
        let mut manager = CommandManager::default();
        for _ in 0..3 {
            manager.execute(create(), &mut store);
        }
        manager.undo(&mut store);
        manager.undo(&mut store);
        assert!(manager.can_redo());

        manager.execute(create(), &mut store);
        assert!(!manager.can_redo());
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.current_index(), Some(1));
    }

    #[test]
    fn test_descriptions() {
        let mut store = DocumentStore::new();
        let mut manager = CommandManager::default();
        let cmd = create();
        let id = cmd.shape().id();
        manager.execute(cmd, &mut store);
        manager.execute(MoveShapes::new("page-1", vec![id], Vec2::new(1.0, 1.0)), &mut store);
        assert_eq!(manager.undo_description().as_deref(), Some("Move 1 shape(s)"));
        manager.undo(&mut store);
        assert_eq!(manager.redo_description().as_deref(), Some("Move 1 shape(s)"));
        assert_eq!(manager.undo_description().as_deref(), Some("Create rectangle"));
    }

    #[test]
    fn test_on_change_receives_status() {
        let mut store = DocumentStore::new();
        let mut manager = CommandManager::default();
        let seen: Rc<RefCell<Vec<HistoryStatus>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        manager.set_on_change(move |status| sink.borrow_mut().push(status.clone()));

        manager.execute(create(), &mut store);
        manager.undo(&mut store);
        manager.undo(&mut store);
        manager.redo(&mut store);
        manager.clear();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(seen[0].can_undo && !seen[0].can_redo);
        assert!(!seen[1].can_undo && seen[1].can_redo);
        assert_eq!(seen[2].current_index, Some(0));
        assert_eq!(seen[3].len, 0);
    }
}
