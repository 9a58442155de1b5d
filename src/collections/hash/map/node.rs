use std::ptr::NonNull;

use crate::collections::cursor::Wrapper;
use crate::util::error::UnsupportedError;

pub(crate) type Bucket<K, V> = Option<HashRef<K, V>>;

/// An entry of a [`HashMap`](super::HashMap), linked to the next entry in the same bucket.
///
/// As a [`Wrapper`], a node exposes its value only. The key is read-only and reachable through
/// [`HashMapCursor::key`](super::HashMapCursor::key).
pub struct HashNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) next: Bucket<K, V>,
}

impl<K, V> Wrapper for HashNode<K, V> {
    type Item = V;

    fn value(&self) -> &V {
        &self.value
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    fn next_ptr(&self) -> Option<NonNull<Self>> {
        self.next.map(HashRef::as_non_null)
    }

    fn prev_ptr(&self) -> Result<Option<NonNull<Self>>, UnsupportedError> {
        Err(UnsupportedError {
            operation: "step backwards within a hash bucket",
        })
    }
}

#[derive(Debug)]
pub(crate) struct HashRef<K, V>(pub NonNull<HashNode<K, V>>);

impl<K, V> HashRef<K, V> {
    pub const fn key<'a>(&self) -> &'a K {
        // SAFETY: A HashRef is only held by its HashMap (or borrowing iterators and cursors), which
        // keeps the node allocated while the reference is used. Keys are never mutated.
        unsafe { &(*self.0.as_ptr()).key }
    }

    pub const fn value<'a>(&self) -> &'a V {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut V {
        // SAFETY: As above, and callers hold the HashMap mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next<'a>(&self) -> &'a Bucket<K, V> {
        // SAFETY: The node is live while its HashMap exists.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Bucket<K, V> {
        // SAFETY: The node is live and only relinked by a HashMap that is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: HashNode<K, V>) -> HashRef<K, V> {
        HashRef(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn take_node(self) -> HashNode<K, V> {
        // SAFETY: Every HashRef is created from a leaked Box and taken exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn as_non_null(self) -> NonNull<HashNode<K, V>> {
        self.0
    }
}

impl<K, V> Clone for HashRef<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for HashRef<K, V> {}

impl<K, V> PartialEq for HashRef<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K, V> Eq for HashRef<K, V> {}
