//! Provider domain actions - business logic functions
//!
//! Actions are the operation surface: they check preconditions against the
//! registry handle, apply the effect, and emit fact events. A failed
//! precondition returns a `RegistryError` and mutates nothing.

mod mutations;
mod queries;

pub use mutations::*;
pub use queries::*;
