// Mirror module
// Keeps zone-aware and wall-clock representations of the same dates in sync

pub mod list;
pub mod value;

pub use list::ListMirror;
pub use value::ValueMirror;

use crate::convert::ConversionContext;
use std::rc::Rc;

/// Supplies the conversion context at forwarding time, so the owning control
/// can change its locale without rewiring the mirrors. A provider that cannot
/// resolve a context must panic; silently dropping elements is never correct.
pub type ContextProvider = Rc<dyn Fn() -> ConversionContext>;
