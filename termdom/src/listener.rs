//! Key listeners attached to individual elements.
//!
//! A listener only sees key events whose target is exactly the element it was
//! registered on; events addressed to descendants are not delivered. Adding a
//! listener hands back a [`ListenerGuard`] and dropping the guard removes the
//! listener, so a component that owns the guard cannot leak handlers or leave
//! a stale one behind.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::{Event, Key, Modifiers};

type Callback<T> = Box<dyn Fn(Key, Modifiers) -> Option<T>>;

struct Entry<T> {
    handle: u64,
    target: String,
    callback: Callback<T>,
}

struct Registry<T> {
    next_handle: u64,
    entries: Vec<Entry<T>>,
}

/// Per-event-loop registry of key listeners producing values of type `T`.
///
/// Cloning yields another handle to the same registry.
pub struct KeyListeners<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for KeyListeners<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for KeyListeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for KeyListeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("KeyListeners")
            .field("targets", &registry.entries.iter().map(|e| &e.target).collect::<Vec<_>>())
            .finish()
    }
}

impl<T> KeyListeners<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_handle: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `callback` for key events targeted at `target`.
    ///
    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn add<F>(&self, target: impl Into<String>, callback: F) -> ListenerGuard<T>
    where
        F: Fn(Key, Modifiers) -> Option<T> + 'static,
    {
        let target = target.into();
        let mut registry = self.inner.borrow_mut();
        let handle = registry.next_handle;
        registry.next_handle += 1;
        log::debug!("[listener] add #{} on {}", handle, target);
        registry.entries.push(Entry {
            handle,
            target: target.clone(),
            callback: Box::new(callback),
        });

        ListenerGuard {
            handle,
            target,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a key event to the listeners registered on its target, in
    /// registration order. Non-key events and untargeted keys yield nothing.
    pub fn dispatch(&self, event: &Event) -> Vec<T> {
        let (Event::Key { key, modifiers, .. }, Some(target)) = (event, event.target()) else {
            return Vec::new();
        };

        let registry = self.inner.borrow();
        registry
            .entries
            .iter()
            .filter(|entry| entry.target == target)
            .filter_map(|entry| (entry.callback)(*key, *modifiers))
            .collect()
    }

    /// Number of listeners currently registered on `target`.
    pub fn count_for(&self, target: &str) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.target == target)
            .count()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

/// Keeps a key listener registered; dropping it removes the listener.
pub struct ListenerGuard<T> {
    handle: u64,
    target: String,
    registry: Weak<RefCell<Registry<T>>>,
}

impl<T> ListenerGuard<T> {
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl<T> fmt::Debug for ListenerGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("handle", &self.handle)
            .field("target", &self.target)
            .finish()
    }
}

impl<T> Drop for ListenerGuard<T> {
    fn drop(&mut self) {
        // Registry may already be gone at teardown.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let Ok(mut registry) = registry.try_borrow_mut() else {
            log::warn!(
                "[listener] #{} on {} dropped during dispatch, not removed",
                self.handle,
                self.target
            );
            return;
        };
        registry.entries.retain(|entry| entry.handle != self.handle);
        log::debug!("[listener] remove #{} on {}", self.handle, self.target);
    }
}
