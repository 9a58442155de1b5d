use std::mem;
use std::ptr::NonNull;

use crate::util::error::UnsupportedError;

/// The storage unit behind a linked cursor: a value slot plus whichever links the container
/// maintains.
///
/// Doubly linked nodes report both neighbours. Singly linked nodes return an [`UnsupportedError`]
/// from [`prev_ptr`](Wrapper::prev_ptr), which forward-only cursors surface from
/// [`Cursor::prev`](super::Cursor::prev). Contiguous containers have no nodes at all; their cursors
/// derive adjacency from the index.
pub trait Wrapper: Sized {
    type Item;

    fn value(&self) -> &Self::Item;

    fn value_mut(&mut self) -> &mut Self::Item;

    fn set_value(&mut self, value: Self::Item) -> Self::Item {
        mem::replace(self.value_mut(), value)
    }

    fn next_ptr(&self) -> Option<NonNull<Self>>;

    fn prev_ptr(&self) -> Result<Option<NonNull<Self>>, UnsupportedError>;
}
