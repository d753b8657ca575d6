// Observable primitives
// Toolkit-free value slots and ordered collections with change notification

pub mod list;
pub mod slot;

pub use list::{ListChange, ObservableList};
pub use slot::Slot;
