use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Cursor, Wrapper};
use crate::util::error::{CursorError, NullPointerError};

pub(crate) type NodeLink<N> = Option<NonNull<N>>;

/// A cursor over a chain of [`Wrapper`] nodes, which moves by following their links.
///
/// Whether the cursor can move backwards depends entirely on the node type: nodes without a
/// backwards link make [`prev`](Cursor::prev) fail with an unsupported error.
///
/// The cursor holds a mutable borrow of its container for `'a`, so nodes can't be freed or relinked
/// while it exists.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `d`: The number of nodes between the two cursors.
/// - `n`: The number of nodes after the earlier cursor.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set` | `O(1)` |
/// | `next/prev` | `O(1)` |
/// | `equal_ptr` | `O(1)` |
/// | `at_next/at_prev` | `O(1)` |
/// | `distance` | `O(d)`, `O(n)`* |
///
/// \* If the cursors can't reach each other, both directions are walked to the end.
pub struct StepCursor<'a, N: Wrapper> {
    pub(crate) node: NodeLink<N>,
    pub(crate) _phantom: PhantomData<&'a mut N>,
}

impl<'a, N: Wrapper> StepCursor<'a, N> {
    /// Creates a cursor at the provided node.
    ///
    /// # Safety
    /// `node` must either be [`None`] or point to a live node which, along with every node reachable
    /// through its links, stays allocated and unaliased by references for all of `'a`.
    pub(crate) const unsafe fn from_link(node: NodeLink<N>) -> StepCursor<'a, N> {
        StepCursor {
            node,
            _phantom: PhantomData,
        }
    }

    fn current(&self) -> Result<NonNull<N>, NullPointerError> {
        self.node.ok_or(NullPointerError)
    }

    /// Counts the forward steps needed to get from `from` to `to`, treating the end of the chain as a
    /// position of its own.
    fn steps_between(from: NodeLink<N>, to: NodeLink<N>) -> Option<i64> {
        let mut current = from;
        let mut steps = 0;
        loop {
            if current == to {
                return Some(steps);
            }
            // SAFETY: Every reachable node is live for 'a, as guaranteed on construction.
            current = unsafe { current?.as_ref() }.next_ptr();
            steps += 1;
        }
    }
}

impl<'a, N: Wrapper> Cursor for StepCursor<'a, N> {
    type Item = N::Item;

    fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    fn get(&self) -> Result<Self::Item, CursorError>
    where
        Self::Item: Clone,
    {
        // SAFETY: The node is live for 'a and no references into it outlive this call.
        Ok(unsafe { self.current()?.as_ref() }.value().clone())
    }

    fn replace(&mut self, value: Self::Item) -> Result<Self::Item, CursorError> {
        // SAFETY: The node is live for 'a and the container is mutably borrowed, so nothing else holds
        // a reference to it.
        Ok(unsafe { self.current()?.as_mut() }.set_value(value))
    }

    fn next(&mut self) -> Result<(), CursorError> {
        // SAFETY: The node is live for 'a.
        self.node = unsafe { self.current()?.as_ref() }.next_ptr();
        Ok(())
    }

    fn prev(&mut self) -> Result<(), CursorError> {
        // SAFETY: The node is live for 'a.
        self.node = unsafe { self.current()?.as_ref() }.prev_ptr()?;
        Ok(())
    }

    fn has_next(&self) -> bool {
        // SAFETY: The node is live for 'a.
        self.node.is_some_and(|node| unsafe { node.as_ref() }.next_ptr().is_some())
    }

    fn has_prev(&self) -> bool {
        // SAFETY: The node is live for 'a.
        self.node.is_some_and(|node| matches!(unsafe { node.as_ref() }.prev_ptr(), Ok(Some(_))))
    }

    fn at_next(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            // SAFETY: The node is live for 'a.
            (Some(node), Some(other)) => unsafe { node.as_ref() }.next_ptr() == Some(other),
            _ => false,
        }
    }

    fn equal_ptr(&self, other: &Self) -> bool {
        self.node == other.node
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        Self::steps_between(other.node, self.node)
            .or_else(|| Self::steps_between(self.node, other.node).map(|steps| -steps))
    }
}

impl<'a, N: Wrapper> Clone for StepCursor<'a, N> {
    fn clone(&self) -> Self {
        StepCursor {
            node: self.node,
            _phantom: PhantomData,
        }
    }
}

impl<'a, N: Wrapper> PartialEq for StepCursor<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_ptr(other)
    }
}

impl<'a, N: Wrapper> Eq for StepCursor<'a, N> {}

impl<'a, N: Wrapper> PartialOrd for StepCursor<'a, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance(other).map(|steps| steps.cmp(&0))
    }
}

impl<'a, N: Wrapper> Debug for StepCursor<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepCursor")
            .field("node", &self.node)
            .finish()
    }
}
