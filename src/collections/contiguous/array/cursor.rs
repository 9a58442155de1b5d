use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::collections::cursor::Cursor;
use crate::util::error::{CursorError, OutOfBoundError};

/// A random-access cursor over a contiguous buffer, used by [`Array`](super::Array) and
/// [`Vector`](crate::collections::contiguous::Vector).
///
/// The cursor stores the start of the buffer, its length and a signed position. The position may
/// move anywhere, including before the first element, but the element pointer is only ever formed
/// while the position is in bounds.
///
/// # Time Complexity
/// All operations, including [`advance`](Cursor::advance) and [`distance`](Cursor::distance), are
/// `O(1)`.
pub struct ArrayCursor<'a, T> {
    pub(crate) base: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) pos: i64,
    pub(crate) _phantom: PhantomData<&'a mut [T]>,
}

impl<'a, T> ArrayCursor<'a, T> {
    /// Creates a cursor over `slice` at the provided position. The position doesn't need to be in
    /// bounds.
    pub fn new(slice: &'a mut [T], pos: i64) -> ArrayCursor<'a, T> {
        ArrayCursor {
            len: slice.len(),
            // SAFETY: Slice pointers are never null.
            base: unsafe { NonNull::new_unchecked(slice.as_mut_ptr()) },
            pos,
            _phantom: PhantomData,
        }
    }

    /// Returns the index of the cursor within its buffer, which is negative before the start.
    pub const fn position(&self) -> i64 {
        self.pos
    }

    const fn in_bounds(&self, pos: i64) -> bool {
        pos >= 0 && (pos as u64) < self.len as u64
    }

    fn element(&self) -> Result<NonNull<T>, OutOfBoundError> {
        if self.in_bounds(self.pos) {
            // SAFETY: pos is within 0..len, so the offset stays inside the borrowed slice.
            Ok(unsafe { self.base.add(self.pos as usize) })
        } else {
            Err(OutOfBoundError)
        }
    }

    fn same_buffer(&self, other: &Self) -> bool {
        self.base == other.base && self.len == other.len
    }
}

impl<'a, T> Cursor for ArrayCursor<'a, T> {
    type Item = T;

    fn is_valid(&self) -> bool {
        self.in_bounds(self.pos)
    }

    fn get(&self) -> Result<T, CursorError>
    where
        T: Clone,
    {
        // SAFETY: The element is in bounds and initialized, and the reference is dropped before this
        // method returns.
        Ok(unsafe { self.element()?.as_ref() }.clone())
    }

    fn replace(&mut self, value: T) -> Result<T, CursorError> {
        // SAFETY: The element is in bounds and initialized. The slice is mutably borrowed for 'a, so
        // no references to the element exist.
        Ok(unsafe { ptr::replace(self.element()?.as_ptr(), value) })
    }

    fn next(&mut self) -> Result<(), CursorError> {
        self.pos = self.pos.saturating_add(1);
        Ok(())
    }

    fn prev(&mut self) -> Result<(), CursorError> {
        self.pos = self.pos.saturating_sub(1);
        Ok(())
    }

    fn has_next(&self) -> bool {
        self.in_bounds(self.pos.saturating_add(1))
    }

    fn has_prev(&self) -> bool {
        self.in_bounds(self.pos.saturating_sub(1))
    }

    fn at_next(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos.checked_add(1) == Some(other.pos)
    }

    fn at_prev(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos.checked_sub(1) == Some(other.pos)
    }

    fn equal_ptr(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos == other.pos
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        self.same_buffer(other).then(|| self.pos.saturating_sub(other.pos))
    }

    fn advance(&mut self, steps: i64) -> Result<(), CursorError> {
        self.pos = self.pos.saturating_add(steps);
        Ok(())
    }

    fn retreat(&mut self, steps: i64) -> Result<(), CursorError> {
        self.pos = self.pos.saturating_sub(steps);
        Ok(())
    }
}

impl<'a, T> Clone for ArrayCursor<'a, T> {
    fn clone(&self) -> Self {
        ArrayCursor {
            base: self.base,
            len: self.len,
            pos: self.pos,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> PartialEq for ArrayCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_ptr(other)
    }
}

impl<'a, T> Eq for ArrayCursor<'a, T> {}

impl<'a, T> PartialOrd for ArrayCursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance(other).map(|steps| steps.cmp(&0))
    }
}

impl<'a, T> Debug for ArrayCursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayCursor")
            .field("base", &self.base)
            .field("len", &self.len)
            .field("pos", &self.pos)
            .finish()
    }
}
