//! Capabilities shared by both the collections and the sync primitives.

mod comparable;

pub use comparable::*;
