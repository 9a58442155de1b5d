//! A module containing [`Array`] and associtated types.
//!
//! Other than [`Array`] itself, this module contains [`IntoIter`] for owned iteration and
//! [`ArrayCursor`], the random-access cursor shared by every contiguous collection.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.

mod array;
mod cursor;
mod iter;
mod tests;

pub use array::*;
pub use cursor::*;
pub use iter::*;
