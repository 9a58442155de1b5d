//! A module containing [`HashMap`] and associtated types.
//!
//! Other than the map itself, this module provides owned and borrowed iteration over entries, keys
//! or values, and [`HashMapCursor`] for the cursor protocol.
//!
//! As a note, there is no mutable access to keys, because mutating the keys of a HashMap in place
//! would cause a logic error.

mod cursor;
mod hash_map;
mod iter;
mod node;

pub use cursor::*;
pub use hash_map::*;
pub use iter::*;
pub use node::*;
