// Observable scalar slot
// The property analog: an Option-valued cell that notifies on real changes

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(Option<&T>, Option<&T>)>;

struct Inner<T: 'static> {
    value: RefCell<Option<T>>,
    listeners: RefCell<Vec<Listener<T>>>,
}

/// An observable scalar holding an optional value.
///
/// Clones share the same underlying cell, so a host control and a mirror can
/// both hold the slot. Single-threaded: all access must happen on the thread
/// that owns the hosting control.
///
/// `set` notifies only when the stored value actually changes. That check is
/// deliberate: it is one of the two guards that stop two slots observing each
/// other from updating forever.
pub struct Slot<T: 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Slot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Create a slot holding an initial value. No notification is emitted.
    pub fn with_value(value: T) -> Self {
        let slot = Self::new();
        *slot.inner.value.borrow_mut() = Some(value);
        slot
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<T: 'static> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> Slot<T> {
    /// Current value, cloned out of the cell.
    pub fn get(&self) -> Option<T> {
        self.inner.value.borrow().clone()
    }

    pub fn is_none(&self) -> bool {
        self.inner.value.borrow().is_none()
    }

    /// Store a value and notify subscribers with the old and new values.
    /// Storing the value already present is a no-op.
    pub fn set(&self, value: Option<T>) {
        let old = {
            let mut slot = self.inner.value.borrow_mut();
            if *slot == value {
                return;
            }
            std::mem::replace(&mut *slot, value.clone())
        };
        self.notify(old.as_ref(), value.as_ref());
    }

    pub fn clear(&self) {
        self.set(None);
    }

    /// Register a change listener called with (old, new) on every real
    /// change. Listeners live as long as the slot; there is no unsubscribe.
    pub fn subscribe(&self, listener: impl Fn(Option<&T>, Option<&T>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self, old: Option<&T>, new: Option<&T>) {
        // dispatch over a snapshot so a listener may subscribe or set
        let listeners: Vec<Listener<T>> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(old, new);
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}
