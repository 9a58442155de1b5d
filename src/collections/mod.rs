//! Containers which share the [`Cursor`](cursor::Cursor) protocol.
//!
//! Each container family sits behind its own Cargo feature: `contiguous`, `linked`, `bits`, `hash`
//! and `adaptors`, all enabled by `collections-all`. The cursor traits are always available.

#[cfg(feature = "adaptors")]
pub mod adaptors;
#[cfg(feature = "bits")]
pub mod bits;
#[cfg(feature = "contiguous")]
pub mod contiguous;
pub mod cursor;
#[cfg(feature = "hash")]
pub mod hash;
mod index;
#[cfg(feature = "linked")]
pub mod linked;

#[allow(unused_imports)]
pub(crate) use index::*;
