//! A module containing [`Vector`] and associtated types.
//!
//! Owned iteration uses [`IntoIter`], a re-export of [`array::IntoIter`](super::array::IntoIter).
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration and [`ArrayCursor`](super::ArrayCursor) provides cursors.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
