pub mod builder;
pub mod notes;

pub use builder::{build_order, OrderDraft, OrderValidationError, DEFAULT_CURRENCY};
pub use notes::{build_notes, NoteMap};
