use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Add, AddAssign, Index, IndexMut};

use derive_more::IsVariant;

use super::{ChainCursor, ChainNode, NodeRef};
use crate::collections::cursor::StepCursor;
use crate::collections::{self, linked::{Length, ONE}};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, NoElementError};
use crate::util::result::ResultExtension;

/// A list with links in both directions, navigable with a bidirectional [`ChainCursor`].
///
/// Every index-based method accepts negative indexes, which count back from the end of the Chain.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Chain.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_begin/end` | `O(1)` |
/// | `pop_begin/end` | `O(1)` |
/// | `get/set` | `O(min(i, n-i))` |
/// | `push` | `O(min(i, n-i))` |
/// | `pop` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `index_of` | `O(n)` |
/// | `begins/ends` | `O(1)` |
///
/// # Examples
/// ```
/// # use original::collections::linked::Chain;
/// # use original::collections::cursor::Cursor;
/// let mut chain: Chain<_> = (1..=3).collect();
/// chain.push_begin(0);
/// assert_eq!(chain[-1], 3);
///
/// let mut cursor = chain.ends();
/// cursor.prev().unwrap();
/// assert_eq!(cursor.get(), Ok(2));
/// ```
pub struct Chain<T> {
    pub(crate) state: ChainState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ChainState<T> {
    Empty,
    Full(ChainContents<T>),
}

use ChainState::*;

pub(crate) struct ChainContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> Chain<T> {
    /// Creates a new Chain with no elements.
    pub const fn new() -> Chain<T> {
        Chain {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the Chain.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the Chain contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the Chain, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ChainContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the Chain, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ChainContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the Chain, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ChainContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the Chain, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ChainContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the Chain.
    pub fn push_begin(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ChainState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the Chain.
    pub fn push_end(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ChainState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Inserts the provided element so that it ends up at `index`. An index equal to the length
    /// appends the element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Chain.
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
                Empty => unreachable!("an empty Chain only accepts index 0"),
                Full(contents) => contents.insert_before(contents.seek(i), value),
            },
        }
        Ok(())
    }

    /// Removes the first element from the Chain and returns it.
    pub fn pop_begin(&mut self) -> Result<T, NoElementError> {
        match &mut self.state {
            Empty => Err(NoElementError),
            Full(contents) => {
                let head = contents.head;
                Ok(self.unlink(head))
            },
        }
    }

    /// Removes the last element from the Chain and returns it.
    pub fn pop_end(&mut self) -> Result<T, NoElementError> {
        match &mut self.state {
            Empty => Err(NoElementError),
            Full(contents) => {
                let tail = contents.tail;
                Ok(self.unlink(tail))
            },
        }
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Chain.
    pub fn pop(&mut self, index: i64) -> T {
        self.try_pop(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking
    /// if `index` is out of bounds.
    pub fn try_pop(&mut self, index: i64) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Chain.
    pub fn get(&self, index: i64) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: i64) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Chain.
    pub fn get_mut(&mut self, index: i64) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: i64) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Chain.
    pub fn set(&mut self, index: i64, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the element at `index`, returning the old value or an [`Err`] if `index` is out of
    /// bounds.
    pub fn try_set(&mut self, index: i64, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Moves every element of `other` onto the end of self.
    pub fn append(&mut self, mut other: Chain<T>) {
        match (&mut self.state, mem::take(&mut other.state)) {
            (_, Empty) => {},
            (Empty, full) => self.state = full,
            (Full(self_contents), Full(other_contents)) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow).throw();

                *self_contents.tail.next_mut() = Some(other_contents.head);
                *other_contents.head.prev_mut() = Some(self_contents.tail);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Returns a cursor at the first element. The cursor is invalid if the Chain is empty.
    pub fn begins(&mut self) -> ChainCursor<'_, T> {
        let head = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head.as_non_null()),
        };
        // SAFETY: The nodes are owned by self, which is mutably borrowed for the cursor's lifetime.
        unsafe { StepCursor::from_link(head) }
    }

    /// Returns a cursor at the last element. The cursor is invalid if the Chain is empty.
    pub fn ends(&mut self) -> ChainCursor<'_, T> {
        let tail = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail.as_non_null()),
        };
        // SAFETY: The nodes are owned by self, which is mutably borrowed for the cursor's lifetime.
        unsafe { StepCursor::from_link(tail) }
    }

    /// Detaches the provided node, which must belong to self, and returns its value.
    fn unlink(&mut self, node: NodeRef<T>) -> T {
        let Full(contents) = &mut self.state else {
            unreachable!("nodes can only be unlinked from a non-empty Chain")
        };

        let node = node.take_node();
        match node.prev {
            Some(prev) => *prev.next_mut() = node.next,
            None => if let Some(next) = node.next { contents.head = next },
        }
        match node.next {
            Some(next) => *next.prev_mut() = node.prev,
            None => if let Some(prev) = node.prev { contents.tail = prev },
        }

        match contents.len.checked_sub(1) {
            Some(len) => contents.len = len,
            None => self.state = Empty,
        }
        node.value
    }

    pub(crate) fn checked_seek(&self, index: i64) -> Result<NodeRef<T>, IndexOutOfBounds> {
        let len = self.len();
        let resolved = collections::element_index(index, len)?;
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len }),
            Full(contents) => Ok(contents.seek(resolved)),
        }
    }

    pub fn iter(&self) -> super::Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> super::IterMut<'_, T> {
        self.into_iter()
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ChainContents { head, tail, len }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    assert!(*next.prev() == Some(curr), "Links should be consistent both ways.");
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr, "The tail should be the last reachable node.");
                assert_eq!(len.get(), count, "The length should match the number of nodes.");
            },
        }
    }
}

impl<T: PartialEq> Chain<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> ChainContents<T> {
    /// Finds the node at `index`, walking from whichever end is closer.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node;
        if index < self.len.get() / 2 {
            node = self.head;
            for _ in 0..index {
                // SAFETY: index < len, so there are at least index nodes after the head.
                node = unsafe { node.next().unwrap_unchecked() };
            }
        } else {
            node = self.tail;
            for _ in 0..(self.last_index() - index) {
                // SAFETY: index < len, so there are enough nodes before the tail.
                node = unsafe { node.prev().unwrap_unchecked() };
            }
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(ChainNode {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(ChainNode {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Inserts a new node directly before `next`, which must not be the head.
    pub fn insert_before(&mut self, next: NodeRef<T>, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let prev = *next.prev();
        let node = NodeRef::from_node(ChainNode {
            value,
            prev,
            next: Some(next),
        });

        if let Some(prev) = prev {
            *prev.next_mut() = Some(node);
        }
        *next.prev_mut() = Some(node);
    }

    pub fn wrap_one(value: T) -> ChainContents<T> {
        let node = NodeRef::from_node(ChainNode {
            value,
            prev: None,
            next: None,
        });

        ChainContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ChainState<T> {
    pub fn single(value: T) -> ChainState<T> {
        Full(ChainContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ChainContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for ChainState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Clone for ChainContents<T> {
    fn clone(&self) -> Self {
        ChainContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ChainState<T> {
    /// Copies the links only, for use by borrowing iterators.
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> Index<i64> for Chain<T> {
    type Output = T;

    fn index(&self, index: i64) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<i64> for Chain<T> {
    fn index_mut(&mut self, index: i64) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AddAssign<Chain<T>> for Chain<T> {
    fn add_assign(&mut self, rhs: Chain<T>) {
        self.append(rhs);
    }
}

impl<T> Add<Chain<T>> for Chain<T> {
    type Output = Chain<T>;

    fn add(mut self, rhs: Chain<T>) -> Self::Output {
        self.append(rhs);
        self
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_end(item);
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        if let Full(ChainContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(node) = curr {
                curr = *node.next();
                drop(node.take_node());
            }
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: Hash> Hash for Chain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: A Chain uniquely owns its nodes, so it is Send when T is.
unsafe impl<T: Send> Send for Chain<T> {}
// SAFETY: Chain's safe API follows the borrow checker, shared references only allow reads.
unsafe impl<T: Sync> Sync for Chain<T> {}

impl<T: Debug> Debug for Chain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Chain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "chain(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
