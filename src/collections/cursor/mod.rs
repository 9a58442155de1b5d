//! The cursor protocol shared by every container.
//!
//! A [`Cursor`] is a position inside a container, independent of how the container stores its
//! elements. Containers create cursors with `begins()` (the first element) and `ends()` (the last
//! element); cursors are plain values, so [`Clone`] produces an independent position and dropping one
//! never affects the container.
//!
//! Two notions of equality exist. [`Cursor::equal_ptr`] (and [`PartialEq`]) is identity: both cursors
//! denote the same slot, checked in constant time. [`Cursor::distance`] (and [`PartialOrd`] /
//! [`Comparable`](crate::traits::Comparable)) is order, which costs a walk for linked containers.

mod cursor;
mod iter;
mod step;
mod wrapper;
#[cfg(all(feature = "contiguous", feature = "linked"))]
mod any;
mod tests;

#[cfg(all(feature = "contiguous", feature = "linked"))]
pub use any::*;
pub use cursor::*;
pub use iter::*;
pub use step::*;
pub use wrapper::*;
