use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Bucket, HashNode, HashRef};
use crate::collections::cursor::{Cursor, Wrapper};
use crate::util::error::{CursorError, NullPointerError};

/// A bidirectional cursor over the entries of a [`HashMap`](super::HashMap).
///
/// The cursor visits entries in bucket order, then in insertion order within a bucket. It is never
/// left on an empty bucket: construction and every step scan across empty buckets until an entry or
/// one of the ends is reached.
///
/// [`get`](Cursor::get), [`set`](Cursor::set) and [`replace`](Cursor::replace) act on the value,
/// while [`key`](HashMapCursor::key) reads the key.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `b`: The number of buckets.
/// - `c`: The number of entries in the current bucket.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set` | `O(1)` |
/// | `next` | `O(1)`, `O(b)`* |
/// | `prev` | `O(c)`, `O(b)`* |
/// | `equal_ptr` | `O(1)` |
/// | `distance` | `O(n + b)` |
///
/// \* When the step leaves the current bucket, the following empty buckets are skipped.
pub struct HashMapCursor<'a, K, V> {
    pub(crate) buckets: NonNull<Bucket<K, V>>,
    pub(crate) count: usize,
    /// The current bucket, `-1` before the first entry and `count` after the last one.
    pub(crate) bucket: i64,
    pub(crate) node: Option<HashRef<K, V>>,
    pub(crate) _phantom: PhantomData<&'a mut HashNode<K, V>>,
}

impl<'a, K, V> HashMapCursor<'a, K, V> {
    fn detached(buckets: &'a mut [Bucket<K, V>]) -> HashMapCursor<'a, K, V> {
        HashMapCursor {
            count: buckets.len(),
            // SAFETY: Slice pointers are never null.
            buckets: unsafe { NonNull::new_unchecked(buckets.as_mut_ptr()) },
            bucket: -1,
            node: None,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn first(buckets: &'a mut [Bucket<K, V>]) -> HashMapCursor<'a, K, V> {
        let mut cursor = HashMapCursor::detached(buckets);
        cursor.seek_forward(0);
        cursor
    }

    pub(crate) fn last(buckets: &'a mut [Bucket<K, V>]) -> HashMapCursor<'a, K, V> {
        let mut cursor = HashMapCursor::detached(buckets);
        cursor.seek_backward(cursor.count as i64 - 1);
        cursor
    }

    /// Returns the index of the bucket the cursor is in.
    pub const fn bucket_index(&self) -> i64 {
        self.bucket
    }

    /// Returns a reference to the key of the entry under the cursor.
    pub fn key(&self) -> Result<&K, CursorError> {
        Ok(self.current()?.key())
    }

    fn current(&self) -> Result<HashRef<K, V>, NullPointerError> {
        self.node.ok_or(NullPointerError)
    }

    fn head(&self, bucket: usize) -> Bucket<K, V> {
        // SAFETY: bucket is below count, and the bucket slice is borrowed for 'a.
        unsafe { *self.buckets.add(bucket).as_ptr() }
    }

    /// Moves to the first entry at or after `bucket`, or past the end.
    fn seek_forward(&mut self, bucket: i64) {
        let mut index = bucket.max(0);
        while (index as u64) < self.count as u64 {
            if let Some(head) = self.head(index as usize) {
                self.bucket = index;
                self.node = Some(head);
                return;
            }
            index += 1;
        }
        self.bucket = self.count as i64;
        self.node = None;
    }

    /// Moves to the last entry at or before `bucket`, or before the start.
    fn seek_backward(&mut self, bucket: i64) {
        let mut index = bucket.min(self.count as i64 - 1);
        while index >= 0 {
            if let Some(mut node) = self.head(index as usize) {
                while let Some(next) = node.next() {
                    node = *next;
                }
                self.bucket = index;
                self.node = Some(node);
                return;
            }
            index -= 1;
        }
        self.bucket = -1;
        self.node = None;
    }

    /// The position of the cursor in traversal order: `-1` before the first entry and the number of
    /// entries after the last one.
    fn ordinal(&self) -> i64 {
        if self.bucket < 0 {
            return -1;
        }

        let mut ordinal = 0;
        for index in 0..self.count {
            let mut curr = self.head(index);
            while let Some(node) = curr {
                if Some(node) == self.node {
                    return ordinal;
                }
                ordinal += 1;
                curr = *node.next();
            }
        }
        ordinal
    }

    fn same_map(&self, other: &Self) -> bool {
        self.buckets == other.buckets && self.count == other.count
    }
}

impl<'a, K, V> Cursor for HashMapCursor<'a, K, V> {
    type Item = V;

    fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    fn get(&self) -> Result<V, CursorError>
    where
        V: Clone,
    {
        Ok(self.current()?.value().clone())
    }

    fn replace(&mut self, value: V) -> Result<V, CursorError> {
        // SAFETY: The node is live for 'a and the HashMap is mutably borrowed, so nothing else holds
        // a reference to it.
        Ok(unsafe { self.current()?.as_non_null().as_mut() }.set_value(value))
    }

    fn next(&mut self) -> Result<(), CursorError> {
        let node = self.current()?;
        match node.next() {
            Some(next) => self.node = Some(*next),
            None => self.seek_forward(self.bucket + 1),
        }
        Ok(())
    }

    fn prev(&mut self) -> Result<(), CursorError> {
        let node = self.current()?;

        let mut prev = None;
        let mut curr = self.head(self.bucket as usize);
        while let Some(candidate) = curr
            && candidate != node
        {
            prev = curr;
            curr = *candidate.next();
        }

        match prev {
            Some(prev) => self.node = Some(prev),
            None => self.seek_backward(self.bucket - 1),
        }
        Ok(())
    }

    fn has_next(&self) -> bool {
        self.get_next().is_ok_and(|next| next.is_valid())
    }

    fn has_prev(&self) -> bool {
        self.get_prev().is_ok_and(|prev| prev.is_valid())
    }

    fn at_next(&self, other: &Self) -> bool {
        self.same_map(other)
            && self.is_valid()
            && self.get_next().is_ok_and(|next| next.node == other.node && next.bucket == other.bucket)
    }

    fn equal_ptr(&self, other: &Self) -> bool {
        self.same_map(other) && self.node == other.node && self.bucket == other.bucket
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        self.same_map(other).then(|| self.ordinal() - other.ordinal())
    }
}

impl<'a, K, V> Clone for HashMapCursor<'a, K, V> {
    fn clone(&self) -> Self {
        HashMapCursor {
            buckets: self.buckets,
            count: self.count,
            bucket: self.bucket,
            node: self.node,
            _phantom: PhantomData,
        }
    }
}

impl<'a, K, V> PartialEq for HashMapCursor<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_ptr(other)
    }
}

impl<'a, K, V> Eq for HashMapCursor<'a, K, V> {}

impl<'a, K, V> PartialOrd for HashMapCursor<'a, K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance(other).map(|steps| steps.cmp(&0))
    }
}

impl<'a, K, V> Debug for HashMapCursor<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMapCursor")
            .field("bucket", &self.bucket)
            .field("node", &self.node.map(HashRef::as_non_null))
            .finish()
    }
}
