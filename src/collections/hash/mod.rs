//! Hash-based collection types. Currently this is only [`HashMap`], which uses separate chaining.

pub mod map;

#[doc(inline)]
pub use map::{HashMap, HashMapCursor};
