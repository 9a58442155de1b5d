use std::ptr::NonNull;

use crate::collections::cursor::{StepCursor, Wrapper};
use crate::util::error::UnsupportedError;

/// A forward-only cursor over a [`ForwardChain`](super::ForwardChain).
pub type ForwardChainCursor<'a, T> = StepCursor<'a, ForwardNode<T>>;

pub(crate) type ForwardLink<T> = Option<ForwardRef<T>>;

/// A node of a [`ForwardChain`](super::ForwardChain), linked only to its successor.
pub struct ForwardNode<T> {
    pub(crate) value: T,
    pub(crate) next: ForwardLink<T>,
}

impl<T> Wrapper for ForwardNode<T> {
    type Item = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn next_ptr(&self) -> Option<NonNull<Self>> {
        self.next.map(ForwardRef::as_non_null)
    }

    fn prev_ptr(&self) -> Result<Option<NonNull<Self>>, UnsupportedError> {
        Err(UnsupportedError {
            operation: "step backwards through a singly linked node",
        })
    }
}

#[derive(Debug)]
pub(crate) struct ForwardRef<T>(pub NonNull<ForwardNode<T>>);

impl<T> ForwardRef<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A ForwardRef is only held by its ForwardChain (or borrowing iterators), which keeps
        // the node allocated for as long as the reference is used.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, and callers hold the ForwardChain mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next<'a>(&self) -> &'a ForwardLink<T> {
        // SAFETY: The node is live while its ForwardChain exists.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut ForwardLink<T> {
        // SAFETY: The node is live and only relinked by a ForwardChain that is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: ForwardNode<T>) -> ForwardRef<T> {
        ForwardRef(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn take_node(self) -> ForwardNode<T> {
        // SAFETY: Every ForwardRef is created from a leaked Box and taken exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn as_non_null(self) -> NonNull<ForwardNode<T>> {
        self.0
    }
}

impl<T> Clone for ForwardRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ForwardRef<T> {}

impl<T> PartialEq for ForwardRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for ForwardRef<T> {}
