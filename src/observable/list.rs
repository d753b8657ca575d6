// Observable ordered collection
// Delivers list edits as batches of removed and added elements

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One change event: everything removed and everything added by a single
/// edit, in that order. Single-element edits carry single-element batches.
#[derive(Debug, Clone, PartialEq)]
pub struct ListChange<T> {
    pub removed: Vec<T>,
    pub added: Vec<T>,
}

impl<T> ListChange<T> {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

type Listener<T> = Rc<dyn Fn(&ListChange<T>)>;

struct Inner<T: 'static> {
    items: RefCell<Vec<T>>,
    listeners: RefCell<Vec<Listener<T>>>,
}

/// An observable ordered collection.
///
/// Clones share the same underlying storage, like [`Slot`](super::Slot).
/// The list itself places no distinctness constraint on its elements;
/// callers that need set semantics check [`contains`](Self::contains)
/// before pushing, the way the mirrors do.
pub struct ObservableList<T: 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> ObservableList<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                items: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.borrow().is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<T: 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> ObservableList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.inner.items.borrow().contains(item)
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.items.borrow().get(index).cloned()
    }

    /// Copy of the current contents, in order.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.items.borrow().clone()
    }

    /// Append an element and emit a one-element addition batch.
    pub fn push(&self, item: T) {
        self.inner.items.borrow_mut().push(item.clone());
        self.notify(&ListChange {
            removed: Vec::new(),
            added: vec![item],
        });
    }

    /// Remove the first occurrence of `item`, if present.
    pub fn remove_item(&self, item: &T) -> bool {
        let removed = {
            let mut items = self.inner.items.borrow_mut();
            items
                .iter()
                .position(|existing| existing == item)
                .map(|index| items.remove(index))
        };
        match removed {
            Some(item) => {
                self.notify(&ListChange {
                    removed: vec![item],
                    added: Vec::new(),
                });
                true
            }
            None => false,
        }
    }

    /// Apply a batched edit: all removals first (each removing the first
    /// matching occurrence, absent elements skipped), then all additions
    /// appended. Subscribers receive ONE change event for the whole edit.
    pub fn splice(&self, remove: &[T], add: &[T]) {
        let change = {
            let mut items = self.inner.items.borrow_mut();
            let mut removed = Vec::new();
            for item in remove {
                if let Some(index) = items.iter().position(|existing| existing == item) {
                    removed.push(items.remove(index));
                }
            }
            items.extend_from_slice(add);
            ListChange {
                removed,
                added: add.to_vec(),
            }
        };
        if !change.is_empty() {
            self.notify(&change);
        }
    }

    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.inner.items.borrow_mut());
        if !removed.is_empty() {
            self.notify(&ListChange {
                removed,
                added: Vec::new(),
            });
        }
    }

    /// Register a change listener. Listeners live as long as the list.
    pub fn subscribe(&self, listener: impl Fn(&ListChange<T>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self, change: &ListChange<T>) {
        // dispatch over a snapshot so a listener may mutate the list
        let listeners: Vec<Listener<T>> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(change);
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.inner.items.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}
