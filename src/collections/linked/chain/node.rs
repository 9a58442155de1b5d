use std::ptr::NonNull;

use crate::collections::cursor::{StepCursor, Wrapper};
use crate::util::error::UnsupportedError;

/// A bidirectional cursor over a [`Chain`](super::Chain).
pub type ChainCursor<'a, T> = StepCursor<'a, ChainNode<T>>;

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A node of a [`Chain`](super::Chain), linked in both directions.
///
/// Nodes are only ever created and destroyed by their Chain. For every interior node,
/// `prev.next == self` and `next.prev == self`.
pub struct ChainNode<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

impl<T> Wrapper for ChainNode<T> {
    type Item = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn next_ptr(&self) -> Option<NonNull<Self>> {
        self.next.map(NodeRef::as_non_null)
    }

    fn prev_ptr(&self) -> Result<Option<NonNull<Self>>, UnsupportedError> {
        Ok(self.prev.map(NodeRef::as_non_null))
    }
}

// NOTE: Nodes are allocated with Box rather than alloc directly, because dereferencing a Box allows
// the node to be moved back out of the heap.

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<ChainNode<T>>);

impl<T> NodeRef<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef is only held by its Chain (or borrowing iterators), which keeps the node
        // allocated for as long as the reference is used.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, and callers hold the Chain mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live while its Chain exists.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live and only relinked by a Chain that is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live while its Chain exists.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live and only relinked by a Chain that is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: ChainNode<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of the heap, freeing its allocation.
    pub fn take_node(self) -> ChainNode<T> {
        // SAFETY: Every NodeRef is created from a leaked Box and taken exactly once by its Chain.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn as_non_null(self) -> NonNull<ChainNode<T>> {
        self.0
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}
