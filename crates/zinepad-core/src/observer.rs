//! Listener registry shared by the document and session stores.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Registry<T> {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Ordered list of change listeners.
///
/// Listeners run synchronously in registration order. A listener may
/// unsubscribe itself or others while a notification is in flight; removed
/// listeners that have not run yet are skipped, the rest still run.
pub struct Observers<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &format!("<{} listeners>", self.len()))
            .finish()
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription
    where
        T: 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            id,
            registry: Some(weak as Weak<dyn Unregister>),
        }
    }

    /// Call every listener with `value`.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<(u64, Listener<T>)> = self.registry.borrow().listeners.clone();
        for (id, listener) in snapshot {
            if self.registry.borrow().contains(id) {
                listener(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

trait Unregister {
    fn unregister(&self, id: u64);
}

impl<T> Unregister for RefCell<Registry<T>> {
    fn unregister(&self, id: u64) {
        self.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    registry: Option<Weak<dyn Unregister>>,
}

impl Subscription {
    /// Remove the listener. Calling this more than once, or after the store
    /// is gone, does nothing.
    pub fn unsubscribe(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            registry.unregister(self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
