use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Add, AddAssign, Index, IndexMut};

use derive_more::IsVariant;

use super::{ForwardChainCursor, ForwardNode, ForwardRef};
use crate::collections::cursor::StepCursor;
use crate::collections::{self, linked::{Length, ONE}};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, NoElementError};
use crate::util::result::ResultExtension;

/// A singly linked list which tracks both its head and its tail, navigable with a forward-only
/// [`ForwardChainCursor`].
///
/// Every index-based method accepts negative indexes, which count back from the end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardChain.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_begin/end` | `O(1)` |
/// | `pop_begin` | `O(1)` |
/// | `pop_end` | `O(n)` |
/// | `get/set` | `O(i)` |
/// | `push/pop` | `O(i)` |
/// | `append` | `O(1)` |
/// | `index_of` | `O(n)` |
pub struct ForwardChain<T> {
    pub(crate) state: ForwardState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ForwardState<T> {
    Empty,
    Full(ForwardContents<T>),
}

use ForwardState::*;

pub(crate) struct ForwardContents<T> {
    pub len: Length,
    pub head: ForwardRef<T>,
    pub tail: ForwardRef<T>,
}

impl<T> ForwardChain<T> {
    /// Creates a new ForwardChain with no elements.
    pub const fn new() -> ForwardChain<T> {
        ForwardChain {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.state.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ForwardContents { head, .. }) => Some(head.value()),
        }
    }

    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ForwardContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the front of the ForwardChain.
    pub fn push_begin(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ForwardState::single(value),
            Full(contents) => {
                contents.grow();
                contents.head = ForwardRef::from_node(ForwardNode {
                    value,
                    next: Some(contents.head),
                });
            },
        }
    }

    /// Adds the provided element to the back of the ForwardChain.
    pub fn push_end(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ForwardState::single(value),
            Full(contents) => {
                contents.grow();
                let node = ForwardRef::from_node(ForwardNode {
                    value,
                    next: None,
                });
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
            },
        }
    }

    /// Inserts the provided element so that it ends up at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardChain.
    pub fn push(&mut self, index: i64, value: T) {
        self.try_push(index, value).throw()
    }

    /// Inserts the provided element so that it ends up at `index`, returning an [`Err`] rather than
    /// panicking if `index` is out of bounds.
    pub fn try_push(&mut self, index: i64, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        match collections::insertion_index(index, len)? {
            0 => self.push_begin(value),
            i if i == len => self.push_end(value),
            i => match &mut self.state {
                Empty => unreachable!("an empty ForwardChain only accepts index 0"),
                Full(contents) => {
                    let prev = contents.seek(i - 1);
                    contents.grow();
                    let node = ForwardRef::from_node(ForwardNode {
                        value,
                        next: *prev.next(),
                    });
                    *prev.next_mut() = Some(node);
                },
            },
        }
        Ok(())
    }

    /// Removes the first element and returns it.
    pub fn pop_begin(&mut self) -> Result<T, NoElementError> {
        let Full(contents) = &mut self.state else {
            return Err(NoElementError);
        };

        let node = contents.head.take_node();
        match (node.next, contents.len.checked_sub(1)) {
            (Some(next), Some(len)) => {
                contents.head = next;
                contents.len = len;
            },
            _ => self.state = Empty,
        }
        Ok(node.value)
    }

    /// Removes the last element and returns it. This requires a walk to find the new tail.
    pub fn pop_end(&mut self) -> Result<T, NoElementError> {
        match self.len() {
            0 => Err(NoElementError),
            1 => self.pop_begin(),
            len => Ok(self.unlink_after(len - 2)),
        }
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardChain.
    pub fn pop(&mut self, index: i64) -> T {
        self.try_pop(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking
    /// if `index` is out of bounds.
    pub fn try_pop(&mut self, index: i64) -> Result<T, IndexOutOfBounds> {
        match collections::element_index(index, self.len())? {
            0 => self.pop_begin().map_err(|_| IndexOutOfBounds { index, len: 0 }),
            i => Ok(self.unlink_after(i - 1)),
        }
    }

    /// Returns a reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardChain.
    pub fn get(&self, index: i64) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: i64) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardChain.
    pub fn get_mut(&mut self, index: i64) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: i64) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardChain.
    pub fn set(&mut self, index: i64, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: i64, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Moves every element of `other` onto the end of self.
    pub fn append(&mut self, mut other: ForwardChain<T>) {
        match (&mut self.state, mem::take(&mut other.state)) {
            (_, Empty) => {},
            (Empty, full) => self.state = full,
            (Full(self_contents), Full(other_contents)) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow).throw();

                *self_contents.tail.next_mut() = Some(other_contents.head);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Returns a cursor at the first element. The cursor is invalid if the ForwardChain is empty.
    pub fn begins(&mut self) -> ForwardChainCursor<'_, T> {
        let head = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head.as_non_null()),
        };
        // SAFETY: The nodes are owned by self, which is mutably borrowed for the cursor's lifetime.
        unsafe { StepCursor::from_link(head) }
    }

    /// Returns a cursor at the last element. The cursor is invalid if the ForwardChain is empty.
    pub fn ends(&mut self) -> ForwardChainCursor<'_, T> {
        let tail = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail.as_non_null()),
        };
        // SAFETY: The nodes are owned by self, which is mutably borrowed for the cursor's lifetime.
        unsafe { StepCursor::from_link(tail) }
    }

    pub fn iter(&self) -> super::Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> super::IterMut<'_, T> {
        self.into_iter()
    }

    /// Removes the node following the one at `index`, which must be at most `len - 2`.
    fn unlink_after(&mut self, index: usize) -> T {
        let Full(contents) = &mut self.state else {
            unreachable!("nodes can only be unlinked from a non-empty ForwardChain")
        };

        let prev = contents.seek(index);
        // SAFETY: index is at most len - 2, so prev has a successor.
        let target = unsafe { prev.next().unwrap_unchecked() }.take_node();
        *prev.next_mut() = target.next;
        if target.next.is_none() {
            contents.tail = prev;
        }

        // Two nodes existed, so the length can't reach zero.
        if let Some(len) = contents.len.checked_sub(1) {
            contents.len = len;
        }
        target.value
    }

    fn checked_seek(&self, index: i64) -> Result<ForwardRef<T>, IndexOutOfBounds> {
        let len = self.len();
        let resolved = collections::element_index(index, len)?;
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len }),
            Full(contents) => Ok(contents.seek(resolved)),
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ForwardContents { head, tail, len }) => {
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr, "The tail should be the last reachable node.");
                assert_eq!(len.get(), count, "The length should match the number of nodes.");
            },
        }
    }
}

impl<T: PartialEq> ForwardChain<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> ForwardContents<T> {
    /// Walks from the head to the node at `index`, which must be in bounds.
    pub fn seek(&self, index: usize) -> ForwardRef<T> {
        if index == self.len.get() - 1 {
            return self.tail;
        }

        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index < len, so there are at least index nodes after the head.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    fn grow(&mut self) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
    }
}

impl<T> ForwardState<T> {
    pub fn single(value: T) -> ForwardState<T> {
        let node = ForwardRef::from_node(ForwardNode {
            value,
            next: None,
        });

        Full(ForwardContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ForwardContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for ForwardState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Clone for ForwardState<T> {
    /// Copies the links only, for use by borrowing iterators.
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(ForwardContents { len, head, tail }) => Full(ForwardContents {
                len: *len,
                head: *head,
                tail: *tail,
            }),
        }
    }
}

impl<T> Index<i64> for ForwardChain<T> {
    type Output = T;

    fn index(&self, index: i64) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<i64> for ForwardChain<T> {
    fn index_mut(&mut self, index: i64) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AddAssign<ForwardChain<T>> for ForwardChain<T> {
    fn add_assign(&mut self, rhs: ForwardChain<T>) {
        self.append(rhs);
    }
}

impl<T> Add<ForwardChain<T>> for ForwardChain<T> {
    type Output = ForwardChain<T>;

    fn add(mut self, rhs: ForwardChain<T>) -> Self::Output {
        self.append(rhs);
        self
    }
}

impl<T> FromIterator<T> for ForwardChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = ForwardChain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for ForwardChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_end(item);
        }
    }
}

impl<T> Default for ForwardChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardChain<T> {
    fn drop(&mut self) {
        if let Full(ForwardContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(node) = curr {
                curr = *node.next();
                drop(node.take_node());
            }
        }
    }
}

impl<T: Clone> Clone for ForwardChain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardChain<T> {}

impl<T: Hash> Hash for ForwardChain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: A ForwardChain uniquely owns its nodes.
unsafe impl<T: Send> Send for ForwardChain<T> {}
// SAFETY: Shared references only allow reads.
unsafe impl<T: Sync> Sync for ForwardChain<T> {}

impl<T: Debug> Debug for ForwardChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for ForwardChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "forwardChain(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
