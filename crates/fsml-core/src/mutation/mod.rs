//! Rename plans for reordering numbered entries.

pub mod model;
pub mod reorder;

pub use reorder::ReorderCase;
