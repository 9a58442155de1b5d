//! Contiguous collection types, [`Array`] and [`Vector`], which share [`ArrayCursor`] for
//! random-access cursors.

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::{Array, ArrayCursor};
#[doc(inline)]
pub use vector::Vector;
